//! # Dispatch
//!
//! Maps the dotted action names accepted on the command line (`cat.shards`,
//! `ml.delete_data_frame_analytics`, ...) to the typed methods of the [`Client`].
use anyhow::Context;
use esbind_core::{ActionError, Arguments, Client, Transport};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError<E: std::error::Error + 'static> {
    #[error("Unknown action '{0}'")]
    UnknownAction(String),
    #[error(transparent)]
    Action(#[from] ActionError<E>),
}

/// Invokes `action` on the client. Existence checks are reported as JSON booleans.
pub async fn call<T: Transport>(
    client: &Client<T>,
    action: &str,
    arguments: &Arguments,
) -> Result<Value, DispatchError<T::Error>> {
    debug!(action, "Dispatching action");

    let value = match action {
        "info" => client.info(arguments).await?,
        "bulk" => client.bulk(arguments).await?,
        "index" => client.index(arguments).await?,
        "get" => client.get(arguments).await?,
        "delete" => client.delete(arguments).await?,
        "exists" => Value::Bool(client.exists(arguments).await?),
        "search" => client.search(arguments).await?,
        "count" => client.count(arguments).await?,
        "cat.indices" => client.cat().indices(arguments).await?,
        "cat.shards" => client.cat().shards(arguments).await?,
        "indices.create" => client.indices().create(arguments).await?,
        "indices.delete" => client.indices().delete(arguments).await?,
        "indices.exists" => Value::Bool(client.indices().exists(arguments).await?),
        "ml.get_data_frame_analytics" => client.ml().get_data_frame_analytics(arguments).await?,
        "ml.delete_data_frame_analytics" => {
            client.ml().delete_data_frame_analytics(arguments).await?
        }
        other => return Err(DispatchError::UnknownAction(other.to_string())),
    };

    Ok(value)
}

/// Reads a bulk payload from disk and turns it into a request body.
pub async fn read_bulk_file(path: &Path) -> anyhow::Result<Value> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read '{}'", path.display()))?;

    debug!(path = %path.display(), bytes = contents.len(), "Read bulk payload");

    if contents.trim().is_empty() {
        anyhow::bail!("'{}' is empty", path.display());
    }

    Ok(bulk_body(contents))
}

/// A JSON array is sent as bulk items, anything else as pre-encoded NDJSON.
fn bulk_body(contents: String) -> Value {
    match serde_json::from_str::<Value>(&contents) {
        Ok(items @ Value::Array(_)) => items,
        _ => Value::String(contents),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esbind_core::actions::OPERATIONS;
    use esbind_core::{Request, Response};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, thiserror::Error)]
    #[error("unreachable")]
    struct Unreachable;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Request>>);

    impl Transport for Recorder {
        type Error = Unreachable;

        async fn perform_request(&self, request: Request) -> Result<Response, Unreachable> {
            self.0.lock().unwrap().push(request);
            Ok(Response {
                status: 200,
                headers: vec![],
                body: json!({ "ok": true }),
            })
        }
    }

    fn arguments_for(name: &str) -> Arguments {
        let operation = esbind_core::actions::operation(name).unwrap();
        operation
            .required
            .iter()
            .fold(Arguments::new(), |arguments, &arg| match arg {
                esbind_core::arguments::BODY => arguments.body(json!({})),
                _ => arguments.arg(arg, "x"),
            })
    }

    #[tokio::test]
    async fn every_registered_action_is_dispatched() {
        let client = Client::new(Recorder::default());

        for operation in OPERATIONS {
            let res = call(&client, operation.name, &arguments_for(operation.name)).await;
            assert!(res.is_ok(), "{} failed: {:?}", operation.name, res);
        }

        assert_eq!(client.transport().0.lock().unwrap().len(), OPERATIONS.len());
    }

    #[tokio::test]
    async fn exists_is_a_boolean() {
        let client = Client::new(Recorder::default());

        let res = call(&client, "indices.exists", &arguments_for("indices.exists"))
            .await
            .unwrap();

        assert_eq!(res, json!(true));
    }

    #[tokio::test]
    async fn unknown_action() {
        let client = Client::new(Recorder::default());

        let err = call(&client, "cat.nodes", &Arguments::new())
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::UnknownAction(ref name) if name == "cat.nodes"));
    }

    #[test]
    fn bulk_file_formats() {
        assert_eq!(
            bulk_body(r#"[{"index":{}},{"a":1}]"#.to_string()),
            json!([{ "index": {} }, { "a": 1 }])
        );

        let ndjson = "{\"index\":{}}\n{\"a\":1}\n".to_string();
        assert_eq!(bulk_body(ndjson.clone()), Value::String(ndjson));
    }

    #[tokio::test]
    async fn missing_bulk_file() {
        let err = read_bulk_file(Path::new("/definitely/not/here.ndjson"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("/definitely/not/here.ndjson"));
    }
}
