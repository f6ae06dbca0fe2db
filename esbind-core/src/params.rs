//! # Query Parameters
//!
//! Whitelisting of the optional query parameters an operation accepts.
//!
//! The allowed names for every operation live in the process-wide [`registry`]. Before a
//! request is sent, [`validate_and_extract`] filters the caller's options down to that set.
//! What happens to an unknown option is decided by [`ParameterValidation`]:
//!
//! * **Strict** (the default): the call fails with [`ArgumentError::UnsupportedParameter`].
//! * **Lenient**: the option is silently dropped.
pub mod registry;

pub use registry::{ParamSet, ParamsRegistry, registry};

use crate::arguments::ArgumentError;
use serde_json::{Map, Value};
use tracing::debug;

/// Query parameters every operation accepts on top of its registered ones.
pub const COMMON_QUERY_PARAMS: &[&str] = &["format", "pretty", "human", "filter_path"];

/// How unknown options are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParameterValidation {
    /// Reject unknown options.
    #[default]
    Strict,
    /// Drop unknown options.
    Lenient,
}

/// Returns the entries of `raw` whose names are in `allowed`, values unchanged.
///
/// `raw` is never modified. List values are not joined here; rendering them for the
/// query string is the transport's concern (see [`crate::request::query_value`]).
///
/// # Returns
///
/// * `Ok(params)` - Exactly the entries of `raw` named in `allowed`.
/// * `Err(ArgumentError::UnsupportedParameter)` - In strict mode, for the first unknown name.
pub fn validate_and_extract(
    raw: &Map<String, Value>,
    allowed: &ParamSet,
    validation: ParameterValidation,
) -> Result<Map<String, Value>, ArgumentError> {
    let mut params = Map::new();

    for (name, value) in raw {
        if allowed.contains(name.as_str()) {
            params.insert(name.clone(), value.clone());
            continue;
        }

        match validation {
            ParameterValidation::Strict => {
                return Err(ArgumentError::UnsupportedParameter(name.clone()));
            }
            ParameterValidation::Lenient => {
                debug!(parameter = %name, "dropping unsupported parameter");
            }
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn allowed(names: &[&str]) -> ParamSet {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn options(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test options must be an object"),
        }
    }

    #[test]
    fn keeps_only_allowed_entries() {
        let raw = options(json!({ "refresh": true, "routing": "r1", "timeout": "1m" }));

        let params = validate_and_extract(
            &raw,
            &allowed(&["refresh", "routing", "pipeline"]),
            ParameterValidation::Lenient,
        )
        .unwrap();

        assert_eq!(
            Value::Object(params),
            json!({ "refresh": true, "routing": "r1" })
        );
    }

    #[test]
    fn strict_mode_names_the_offending_key() {
        let raw = options(json!({ "refresh": true, "bogus": 1 }));

        let err = validate_and_extract(&raw, &allowed(&["refresh"]), ParameterValidation::Strict)
            .unwrap_err();

        assert_eq!(err, ArgumentError::UnsupportedParameter("bogus".to_string()));
        assert_eq!(err.to_string(), "URL parameter 'bogus' is not supported");
    }

    #[test]
    fn strict_mode_accepts_a_subset() {
        let raw = options(json!({ "_source_includes": ["a", "b"], "refresh": "wait_for" }));

        let params = validate_and_extract(
            &raw,
            &allowed(&["_source_includes", "refresh", "routing"]),
            ParameterValidation::Strict,
        )
        .unwrap();

        // Lists are passed through untouched.
        assert_eq!(params["_source_includes"], json!(["a", "b"]));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn input_is_left_unmodified() {
        let raw = options(json!({ "refresh": true, "bogus": 1 }));
        let before = raw.clone();

        let _ = validate_and_extract(&raw, &allowed(&["refresh"]), ParameterValidation::Lenient);
        let _ = validate_and_extract(&raw, &allowed(&["refresh"]), ParameterValidation::Strict);

        assert_eq!(raw, before);
    }

    #[test]
    fn empty_allowed_set_accepts_nothing() {
        let raw = options(json!({ "pretty": true }));

        let params =
            validate_and_extract(&raw, &ParamSet::new(), ParameterValidation::Lenient).unwrap();
        assert!(params.is_empty());

        let empty = Map::new();
        let params =
            validate_and_extract(&empty, &ParamSet::new(), ParameterValidation::Strict).unwrap();
        assert!(params.is_empty());
    }
}
