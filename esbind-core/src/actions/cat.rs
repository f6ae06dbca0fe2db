//! `_cat` actions.
//!
//! These return plain text tables unless `format` asks for JSON, so their bodies come back
//! as a JSON string in the first case.
use super::Operation;
use crate::{
    ActionError,
    arguments::{ArgumentError, Arguments},
    client::Cat,
    params::ParameterValidation,
    path::pathify,
    request::Request,
    transport::Transport,
};
use http::Method;
use serde_json::Value;

pub static INDICES: Operation = Operation {
    name: "cat.indices",
    required: &[],
    params: &[
        "format",
        "bytes",
        "local",
        "master_timeout",
        "h",
        "health",
        "help",
        "pri",
        "s",
        "time",
        "v",
        "include_unloaded_segments",
        "expand_wildcards",
    ],
};

pub static SHARDS: Operation = Operation {
    name: "cat.shards",
    required: &[],
    params: &[
        "format",
        "bytes",
        "local",
        "master_timeout",
        "h",
        "help",
        "s",
        "time",
        "v",
    ],
};

fn cat_request(
    operation: &'static Operation,
    endpoint: &str,
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    let mut assembly = operation.assemble(arguments)?;
    let index = assembly.take_segment("index");
    let path = pathify([endpoint, index.as_str()]);
    assembly.finish(Method::GET, path, None, validation)
}

pub(crate) fn indices_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    cat_request(&INDICES, "_cat/indices", arguments, validation)
}

pub(crate) fn shards_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    cat_request(&SHARDS, "_cat/shards", arguments, validation)
}

impl<T: Transport> Cat<'_, T> {
    /// Lists indices, optionally restricted by `index`.
    pub async fn indices(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = indices_request(arguments, self.client.parameter_validation())?;
        Ok(self.client.perform_request(request).await?.body)
    }

    /// Lists shards and the nodes holding them, optionally restricted by `index`.
    pub async fn shards(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = shards_request(arguments, self.client.parameter_validation())?;
        Ok(self.client.perform_request(request).await?.body)
    }
}
