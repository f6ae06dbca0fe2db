//! The `_bulk` action: many index/create/update/delete operations in one request.
use super::Operation;
use crate::{
    ActionError, Client,
    arguments::{ArgumentError, Arguments, BODY},
    bulk::{NDJSON_CONTENT_TYPE, bulkify},
    params::ParameterValidation,
    request::{Body, CONTENT_TYPE, Request},
    transport::Transport,
};
use http::Method;
use serde_json::Value;

pub static BULK: Operation = Operation {
    name: "bulk",
    required: &[BODY],
    params: &[
        "wait_for_active_shards",
        "refresh",
        "routing",
        "timeout",
        "type",
        "_source",
        "_source_excludes",
        "_source_includes",
        "pipeline",
    ],
};

pub(crate) fn bulk_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    let mut assembly = BULK.assemble(arguments)?;
    let index = assembly.take_segment("index");
    let doc_type = assembly.take_segment("type");

    // A type without an index has no path of its own.
    let path = match (index.is_empty(), doc_type.is_empty()) {
        (false, false) => format!("{index}/{doc_type}/_bulk"),
        (false, true) => format!("{index}/_bulk"),
        (true, _) => "_bulk".to_string(),
    };

    let body = match assembly.take_body() {
        Some(Value::Array(items)) => Some(Body::Raw(bulkify(&items))),
        Some(Value::String(payload)) => Some(Body::Raw(payload)),
        Some(other) => Some(Body::Json(other)),
        None => None,
    };
    assembly.force_header(CONTENT_TYPE, NDJSON_CONTENT_TYPE);

    assembly.finish(Method::POST, path, body, validation)
}

impl<T: Transport> Client<T> {
    /// Performs many index/create/update/delete operations in a single request.
    ///
    /// The body is either an array of items (see [`crate::bulk`] for the accepted shapes) or
    /// an already serialized NDJSON string. `index` and `type` set defaults for items which
    /// don't name their own. The `Content-Type` is always `application/x-ndjson`.
    pub async fn bulk(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = bulk_request(arguments, self.parameter_validation())?;
        Ok(self.perform_request(request).await?.body)
    }
}
