//! Query actions: `_search` and `_count`.
use super::{Operation, get_or_post};
use crate::{
    ActionError, Client,
    arguments::{ArgumentError, Arguments},
    params::ParameterValidation,
    path::pathify,
    request::{Body, Request},
    transport::Transport,
};
use serde_json::Value;

pub static SEARCH: Operation = Operation {
    name: "search",
    required: &[],
    params: &[
        "analyzer",
        "analyze_wildcard",
        "ccs_minimize_roundtrips",
        "default_operator",
        "df",
        "explain",
        "stored_fields",
        "docvalue_fields",
        "from",
        "ignore_unavailable",
        "ignore_throttled",
        "allow_no_indices",
        "expand_wildcards",
        "lenient",
        "preference",
        "q",
        "routing",
        "scroll",
        "search_type",
        "size",
        "sort",
        "_source",
        "_source_excludes",
        "_source_includes",
        "terminate_after",
        "stats",
        "suggest_field",
        "suggest_mode",
        "suggest_size",
        "suggest_text",
        "timeout",
        "track_scores",
        "track_total_hits",
        "allow_partial_search_results",
        "typed_keys",
        "version",
        "seq_no_primary_term",
        "request_cache",
        "batched_reduce_size",
        "max_concurrent_shard_requests",
        "pre_filter_shard_size",
        "rest_total_hits_as_int",
    ],
};

pub static COUNT: Operation = Operation {
    name: "count",
    required: &[],
    params: &[
        "ignore_unavailable",
        "ignore_throttled",
        "allow_no_indices",
        "expand_wildcards",
        "min_score",
        "preference",
        "routing",
        "q",
        "analyzer",
        "analyze_wildcard",
        "default_operator",
        "df",
        "lenient",
        "terminate_after",
    ],
};

fn query_request(
    operation: &'static Operation,
    endpoint: &str,
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    let mut assembly = operation.assemble(arguments)?;
    let index = assembly.take_segment("index");
    let body = assembly.take_body().map(Body::Json);

    let method = get_or_post(body.as_ref());
    let path = pathify([index.as_str(), endpoint]);

    assembly.finish(method, path, body, validation)
}

pub(crate) fn search_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    query_request(&SEARCH, "_search", arguments, validation)
}

pub(crate) fn count_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    query_request(&COUNT, "_count", arguments, validation)
}

impl<T: Transport> Client<T> {
    /// Runs a search, across all indices unless `index` narrows it down.
    pub async fn search(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = search_request(arguments, self.parameter_validation())?;
        Ok(self.perform_request(request).await?.body)
    }

    /// Counts the documents matching a query.
    pub async fn count(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = count_request(arguments, self.parameter_validation())?;
        Ok(self.perform_request(request).await?.body)
    }
}
