//! Index management actions.
use super::Operation;
use crate::{
    ActionError,
    arguments::{ArgumentError, Arguments},
    client::Indices,
    params::ParameterValidation,
    request::{Body, Request},
    transport::Transport,
};
use http::Method;
use serde_json::Value;

pub static CREATE: Operation = Operation {
    name: "indices.create",
    required: &["index"],
    params: &[
        "wait_for_active_shards",
        "timeout",
        "master_timeout",
        "include_type_name",
    ],
};

pub static DELETE: Operation = Operation {
    name: "indices.delete",
    required: &["index"],
    params: &[
        "timeout",
        "master_timeout",
        "ignore_unavailable",
        "allow_no_indices",
        "expand_wildcards",
    ],
};

pub static EXISTS: Operation = Operation {
    name: "indices.exists",
    required: &["index"],
    params: &[
        "local",
        "ignore_unavailable",
        "allow_no_indices",
        "expand_wildcards",
        "flat_settings",
        "include_defaults",
    ],
};

pub(crate) fn create_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    let mut assembly = CREATE.assemble(arguments)?;
    let path = assembly.take_segment("index");
    let body = assembly.take_body().map(Body::Json);
    assembly.finish(Method::PUT, path, body, validation)
}

pub(crate) fn delete_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    let mut assembly = DELETE.assemble(arguments)?;
    let path = assembly.take_segment("index");
    assembly.finish(Method::DELETE, path, None, validation)
}

pub(crate) fn exists_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    let mut assembly = EXISTS.assemble(arguments)?;
    let path = assembly.take_segment("index");
    assembly.ignore_status(404);
    assembly.finish(Method::HEAD, path, None, validation)
}

impl<T: Transport> Indices<'_, T> {
    /// Creates an index; the optional body carries settings and mappings.
    pub async fn create(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = create_request(arguments, self.client.parameter_validation())?;
        Ok(self.client.perform_request(request).await?.body)
    }

    pub async fn delete(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = delete_request(arguments, self.client.parameter_validation())?;
        Ok(self.client.perform_request(request).await?.body)
    }

    /// Whether all the given indices exist.
    pub async fn exists(&self, arguments: &Arguments) -> Result<bool, ActionError<T::Error>> {
        let request = exists_request(arguments, self.client.parameter_validation())?;
        Ok(self.client.perform_request(request).await?.status == 200)
    }
}
