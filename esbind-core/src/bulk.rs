//! # Bulk Body Encoding
//!
//! The bulk endpoints take a newline-delimited JSON payload: one line of action metadata,
//! optionally followed by one line with the document it applies to.
//!
//! [`bulkify`] accepts three shapes of item arrays:
//!
//! 1. **Action/document pairs**, each item serialized as one line:
//!    `[{"index": {"_id": 1}}, {"field": "x"}]`.
//! 2. **Actions with embedded documents**, where the document travels under a `data` key of
//!    the action metadata: `[{"index": {"_id": 1, "data": {"field": "x"}}}]`. The metadata
//!    line is emitted without `data`, followed by the document line. Actions without `data`
//!    (such as `delete`) contribute a single line. Keys next to the action are dropped.
//! 3. **Pre-serialized lines**, an array of strings joined as-is.
//!
//! The payload always ends with a newline, unless there were no items at all.
use serde_json::Value;

/// Media type of bulk payloads.
pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Actions that can carry an embedded document.
const ACTIONS: [&str; 4] = ["index", "create", "delete", "update"];

const DATA: &str = "data";

/// Serializes bulk items into a newline-delimited JSON payload.
pub fn bulkify(items: &[Value]) -> String {
    let lines: Vec<String> = if items.iter().any(has_embedded_data) {
        items.iter().flat_map(expand_embedded).collect()
    } else if items.iter().all(Value::is_string) {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    } else {
        items.iter().map(Value::to_string).collect()
    };

    let mut payload = lines.join("\n");
    if !lines.is_empty() {
        payload.push('\n');
    }
    payload
}

/// Returns the `(action, metadata)` entry of an item like `{"index": {...}}`.
///
/// Keys other than the action are ignored. An item naming several actions has none.
fn action_entry(item: &Value) -> Option<(&String, &Value)> {
    let mut actions = item
        .as_object()?
        .iter()
        .filter(|(action, meta)| ACTIONS.contains(&action.as_str()) && meta.is_object());

    let entry = actions.next()?;
    actions.next().is_none().then_some(entry)
}

fn has_embedded_data(item: &Value) -> bool {
    action_entry(item)
        .and_then(|(_, meta)| meta.get(DATA))
        .is_some_and(|data| !data.is_null())
}

fn expand_embedded(item: &Value) -> Vec<String> {
    let Some((action, meta)) = action_entry(item) else {
        return vec![item.to_string()];
    };

    let mut meta = meta.as_object().cloned().unwrap_or_default();
    let data = meta.remove(DATA).filter(|data| !data.is_null());

    let mut header = serde_json::Map::new();
    header.insert(action.clone(), Value::Object(meta));

    let mut lines = vec![Value::Object(header).to_string()];
    if let Some(data) = data {
        lines.push(data.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_action_document_pairs() {
        let items = vec![json!({ "index": { "_id": 1 } }), json!({ "field": "x" })];

        assert_eq!(bulkify(&items), "{\"index\":{\"_id\":1}}\n{\"field\":\"x\"}\n");
    }

    #[test]
    fn expands_embedded_documents() {
        let items = vec![
            json!({ "index":  { "_index": "myindex", "_id": "1", "data": { "title": "Test" } } }),
            json!({ "update": { "_index": "myindex", "_id": "2", "data": { "doc": { "title": "Update" } } } }),
            json!({ "delete": { "_index": "myindex", "_id": "3" } }),
        ];

        let expected = concat!(
            "{\"index\":{\"_id\":\"1\",\"_index\":\"myindex\"}}\n",
            "{\"title\":\"Test\"}\n",
            "{\"update\":{\"_id\":\"2\",\"_index\":\"myindex\"}}\n",
            "{\"doc\":{\"title\":\"Update\"}}\n",
            "{\"delete\":{\"_id\":\"3\",\"_index\":\"myindex\"}}\n",
        );

        assert_eq!(bulkify(&items), expected);
    }

    #[test]
    fn embedded_metadata_is_not_mutated() {
        let items = vec![json!({ "create": { "_id": "1", "data": { "a": 1 } } })];
        let before = items.clone();

        bulkify(&items);

        assert_eq!(items, before);
    }

    #[test]
    fn embedded_documents_ignore_sibling_keys() {
        let items = vec![json!({
            "index": { "_id": "1", "data": { "title": "Test" } },
            "routing_hint": "r1",
        })];

        assert_eq!(
            bulkify(&items),
            "{\"index\":{\"_id\":\"1\"}}\n{\"title\":\"Test\"}\n"
        );
    }

    #[test]
    fn joins_preserialized_lines() {
        let items = vec![
            json!("{\"index\":{\"_id\":\"1\"}}"),
            json!("{\"title\":\"Test\"}"),
        ];

        assert_eq!(
            bulkify(&items),
            "{\"index\":{\"_id\":\"1\"}}\n{\"title\":\"Test\"}\n"
        );
    }

    #[test]
    fn empty_items_produce_empty_payload() {
        assert_eq!(bulkify(&[]), "");
    }
}
