//! # Path Building
//!
//! Turns identifiers (indices, types, ids) into URL path segments.
//!
//! [`listify`] escapes each identifier and joins several of them with commas, which is how
//! the API addresses multiple targets at once (`logs-1,logs-2/_search`). An empty result
//! means "no such segment": callers pick a path template without it instead of emitting
//! an empty segment.
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

/// Characters escaped inside a path segment.
///
/// `*` stays literal so that index patterns keep working.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'*');

/// Percent-encodes a single identifier for use in a path segment.
pub fn escape(identifier: &str) -> String {
    utf8_percent_encode(identifier, PATH_SEGMENT).to_string()
}

/// Escapes and comma-joins identifiers.
///
/// Identifiers which already contain commas are split first, so `"a,b"` and `["a", "b"]`
/// produce the same segment. Empty identifiers are skipped.
///
/// ```rust
/// use esbind_core::path::listify;
///
/// assert_eq!(listify(["a", "b"]), "a,b");
/// assert_eq!(listify(["a/b"]), "a%2Fb");
/// assert_eq!(listify(None::<&str>), "");
/// ```
pub fn listify<I, S>(identifiers: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segment = String::new();

    for identifier in identifiers {
        for part in identifier.as_ref().split(',').filter(|part| !part.is_empty()) {
            if !segment.is_empty() {
                segment.push(',');
            }
            segment.push_str(&escape(part));
        }
    }

    segment
}

/// [`listify`] over an option value: a string, a number, or a list of those.
///
/// `None` and `null` produce an empty segment.
pub fn listify_value(value: Option<&Value>) -> String {
    let mut identifiers = Vec::new();
    if let Some(value) = value {
        collect_identifiers(value, &mut identifiers);
    }
    listify(identifiers)
}

fn collect_identifiers(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|item| collect_identifiers(item, out)),
        other => out.push(other.to_string()),
    }
}

/// Joins path segments with `/`, skipping empty ones.
///
/// ```rust
/// use esbind_core::path::pathify;
///
/// assert_eq!(pathify(["_cat/shards", ""]), "_cat/shards");
/// assert_eq!(pathify(["", "_search"]), "_search");
/// ```
pub fn pathify<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .filter_map(|segment| {
            let segment = segment.as_ref().trim_matches('/');
            (!segment.is_empty()).then(|| segment.to_string())
        })
        .collect::<Vec<_>>()
        .join("/")
}
