//! Single document actions, plus `info` on the cluster root.
use super::Operation;
use crate::{
    ActionError, Client,
    arguments::{ArgumentError, Arguments, BODY},
    params::ParameterValidation,
    path::pathify,
    request::{Body, Request},
    transport::Transport,
};
use http::Method;
use serde_json::Value;

const GET_PARAMS: &[&str] = &[
    "stored_fields",
    "preference",
    "realtime",
    "refresh",
    "routing",
    "_source",
    "_source_excludes",
    "_source_includes",
    "version",
    "version_type",
];

pub static INFO: Operation = Operation {
    name: "info",
    required: &[],
    params: &[],
};

pub static INDEX: Operation = Operation {
    name: "index",
    required: &["index", BODY],
    params: &[
        "wait_for_active_shards",
        "op_type",
        "refresh",
        "routing",
        "timeout",
        "version",
        "version_type",
        "if_seq_no",
        "if_primary_term",
        "pipeline",
    ],
};

pub static GET: Operation = Operation {
    name: "get",
    required: &["index", "id"],
    params: GET_PARAMS,
};

pub static DELETE: Operation = Operation {
    name: "delete",
    required: &["index", "id"],
    params: &[
        "wait_for_active_shards",
        "refresh",
        "routing",
        "timeout",
        "if_seq_no",
        "if_primary_term",
        "version",
        "version_type",
    ],
};

pub static EXISTS: Operation = Operation {
    name: "exists",
    required: &["index", "id"],
    params: GET_PARAMS,
};

pub(crate) fn info_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    INFO.assemble(arguments)?
        .finish(Method::GET, String::new(), None, validation)
}

pub(crate) fn index_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    let mut assembly = INDEX.assemble(arguments)?;
    let index = assembly.take_segment("index");
    let id = assembly.take_segment("id");
    let body = assembly.take_body().map(Body::Json);

    // An explicit id replaces the document in place, otherwise the server picks one.
    let (method, path) = if id.is_empty() {
        (Method::POST, pathify([index.as_str(), "_doc"]))
    } else {
        (Method::PUT, pathify([index.as_str(), "_doc", id.as_str()]))
    };

    assembly.finish(method, path, body, validation)
}

fn document_request(
    operation: &'static Operation,
    method: Method,
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    let mut assembly = operation.assemble(arguments)?;
    let index = assembly.take_segment("index");
    let id = assembly.take_segment("id");

    if method == Method::HEAD {
        assembly.ignore_status(404);
    }

    let path = pathify([index.as_str(), "_doc", id.as_str()]);
    assembly.finish(method, path, None, validation)
}

pub(crate) fn get_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    document_request(&GET, Method::GET, arguments, validation)
}

pub(crate) fn delete_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    document_request(&DELETE, Method::DELETE, arguments, validation)
}

pub(crate) fn exists_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    document_request(&EXISTS, Method::HEAD, arguments, validation)
}

impl<T: Transport> Client<T> {
    /// Returns basic information about the cluster.
    pub async fn info(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = info_request(arguments, self.parameter_validation())?;
        Ok(self.perform_request(request).await?.body)
    }

    /// Creates or replaces a document.
    ///
    /// Requires `index` and a body. With an `id` the document is stored under it (`PUT`),
    /// without one the server generates it (`POST`).
    pub async fn index(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = index_request(arguments, self.parameter_validation())?;
        Ok(self.perform_request(request).await?.body)
    }

    /// Fetches a document by `index` and `id`.
    pub async fn get(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = get_request(arguments, self.parameter_validation())?;
        Ok(self.perform_request(request).await?.body)
    }

    /// Deletes a document by `index` and `id`.
    pub async fn delete(&self, arguments: &Arguments) -> Result<Value, ActionError<T::Error>> {
        let request = delete_request(arguments, self.parameter_validation())?;
        Ok(self.perform_request(request).await?.body)
    }

    /// Whether a document exists. A missing document is `Ok(false)`, not an error.
    pub async fn exists(&self, arguments: &Arguments) -> Result<bool, ActionError<T::Error>> {
        let request = exists_request(arguments, self.parameter_validation())?;
        Ok(self.perform_request(request).await?.status == 200)
    }
}
