//! # Actions
//!
//! One callable action per remote endpoint, grouped the way the API groups them.
//!
//! Every action follows the same recipe, implemented once by [`Operation::assemble`] and
//! [`Assembly::finish`]:
//!
//! 1. Check the required arguments, before anything else is built.
//! 2. Clone the caller's [`Arguments`] and take the headers and the `ignore` option out.
//! 3. Take the positional arguments (index, id, ...) out of the clone and turn them into
//!    path segments.
//! 4. Validate what is left against the operation's registered parameters.
//! 5. Hand the resulting [`Request`] to the transport.
//!
//! Each group module only has to describe its [`Operation`]s and the path templates.
pub mod bulk;
pub mod cat;
pub mod document;
pub mod indices;
pub mod ml;
pub mod search;

use crate::{
    arguments::{ArgumentError, Arguments, BODY, Headers},
    params::{self, COMMON_QUERY_PARAMS, ParamSet, ParameterValidation},
    path::listify_value,
    request::{self, Body, Request},
};
use http::Method;
use serde_json::Value;

const IGNORE: &str = "ignore";

/// Static description of one remote action.
#[derive(Debug)]
pub struct Operation {
    /// Registry key, dotted for namespaced actions (`cat.shards`).
    pub name: &'static str,
    pub required: &'static [&'static str],
    /// Optional query parameters the endpoint recognizes.
    pub params: &'static [&'static str],
}

/// Every action the client knows about, used to populate the parameters registry.
pub static OPERATIONS: &[&Operation] = &[
    &document::INFO,
    &document::INDEX,
    &document::GET,
    &document::DELETE,
    &document::EXISTS,
    &bulk::BULK,
    &search::SEARCH,
    &search::COUNT,
    &cat::INDICES,
    &cat::SHARDS,
    &indices::CREATE,
    &indices::DELETE,
    &indices::EXISTS,
    &ml::GET_DATA_FRAME_ANALYTICS,
    &ml::DELETE_DATA_FRAME_ANALYTICS,
];

/// Looks up an operation by its registry name.
pub fn operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().copied().find(|op| op.name == name)
}

impl Operation {
    /// Parameters accepted by this operation: its registered ones plus the common ones.
    pub fn allowed_params(&self) -> ParamSet {
        let mut allowed = ParamSet::clone(&params::registry().get(self.name));
        allowed.extend(COMMON_QUERY_PARAMS.iter().map(|name| name.to_string()));
        allowed
    }

    /// Starts assembling a request from the caller's arguments.
    ///
    /// Fails with [`ArgumentError::MissingArgument`] before touching anything else if a
    /// required argument is absent. Required path identifiers which are empty (`""`, `[]`,
    /// `","`) count as absent. The caller's arguments are never modified.
    pub(crate) fn assemble(
        &'static self,
        arguments: &Arguments,
    ) -> Result<Assembly, ArgumentError> {
        for &name in self.required {
            arguments.require(name)?;

            // A positional that renders to nothing would silently drop its path segment.
            if name != BODY && listify_value(arguments.get(name)).is_empty() {
                return Err(ArgumentError::MissingArgument(name));
            }
        }

        let mut arguments = arguments.clone();
        let headers = arguments.take_headers();
        let ignore = arguments
            .take(IGNORE)
            .map(|value| request::parse_ignore(&value))
            .unwrap_or_default();

        Ok(Assembly {
            operation: self,
            arguments,
            headers,
            ignore,
        })
    }
}

/// A request being assembled from a private copy of the caller's arguments.
#[derive(Debug)]
pub(crate) struct Assembly {
    operation: &'static Operation,
    arguments: Arguments,
    headers: Headers,
    ignore: Vec<u16>,
}

impl Assembly {
    /// Takes a positional argument out, so it cannot end up in the query string.
    pub(crate) fn take(&mut self, name: &str) -> Option<Value> {
        self.arguments.take(name)
    }

    /// Takes a positional argument out and renders it as a path segment.
    ///
    /// Returns an empty string when the argument is absent.
    pub(crate) fn take_segment(&mut self, name: &str) -> String {
        listify_value(self.take(name).as_ref())
    }

    pub(crate) fn take_body(&mut self) -> Option<Value> {
        self.arguments.take_body()
    }

    pub(crate) fn force_header(&mut self, name: &str, value: &str) {
        request::merge_header(&mut self.headers, name, value);
    }

    pub(crate) fn ignore_status(&mut self, status: u16) {
        if !self.ignore.contains(&status) {
            self.ignore.push(status);
        }
    }

    /// Validates the remaining options and produces the request.
    pub(crate) fn finish(
        self,
        method: Method,
        path: String,
        body: Option<Body>,
        validation: ParameterValidation,
    ) -> Result<Request, ArgumentError> {
        let allowed = self.operation.allowed_params();
        let params = params::validate_and_extract(self.arguments.options(), &allowed, validation)?;

        Ok(Request {
            method,
            path,
            params,
            body,
            headers: self.headers,
            ignore: self.ignore,
        })
    }
}

/// `POST` when a body is present, `GET` otherwise.
pub(crate) fn get_or_post(body: Option<&Body>) -> Method {
    if body.is_some() {
        Method::POST
    } else {
        Method::GET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn operation_names_are_unique() {
        let names: HashSet<_> = OPERATIONS.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), OPERATIONS.len());
    }

    #[test]
    fn looks_up_operations_by_name() {
        assert_eq!(operation("cat.shards").map(|op| op.name), Some("cat.shards"));
        assert!(operation("cat.nope").is_none());
    }

    #[test]
    fn common_params_are_always_allowed() {
        let allowed = ml::DELETE_DATA_FRAME_ANALYTICS.allowed_params();

        for name in COMMON_QUERY_PARAMS {
            assert!(allowed.contains(*name));
        }
        assert!(allowed.contains("force"));
    }

    #[test]
    fn empty_required_identifiers_count_as_missing() {
        for id in [json!(""), json!([]), json!(","), json!([""])] {
            let arguments = Arguments::new().arg("id", id);

            assert_eq!(
                ml::DELETE_DATA_FRAME_ANALYTICS.assemble(&arguments).err(),
                Some(ArgumentError::MissingArgument("id"))
            );
        }
    }

    #[test]
    fn positional_arguments_never_reach_the_query() {
        let arguments = Arguments::new()
            .arg("id", "job-1")
            .arg("force", true)
            .arg("ignore", 404)
            .header("X-Opaque-Id", "abc");

        let mut assembly = ml::DELETE_DATA_FRAME_ANALYTICS.assemble(&arguments).unwrap();
        assert_eq!(assembly.take_segment("id"), "job-1");

        let request = assembly
            .finish(
                Method::DELETE,
                "x".to_string(),
                None,
                ParameterValidation::Strict,
            )
            .unwrap();

        assert_eq!(Value::Object(request.params), json!({ "force": true }));
        assert_eq!(request.ignore, vec![404]);
        assert_eq!(
            request.headers,
            vec![("X-Opaque-Id".to_string(), "abc".to_string())]
        );
        // The caller's arguments are untouched.
        assert_eq!(arguments.get("id"), Some(&json!("job-1")));
        assert_eq!(arguments.header_list().len(), 1);
    }
}
