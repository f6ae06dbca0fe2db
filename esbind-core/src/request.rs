//! # Request & Response
//!
//! The value types exchanged between an action and its [`crate::Transport`].
//!
//! A [`Request`] is fully assembled (path escaped, parameters validated, body encoded) by the
//! time it reaches the transport. Rendering the parameters into a query string is left to the
//! transport, using [`Request::query_pairs`].
use crate::arguments::Headers;
use http::Method;
use serde_json::{Map, Value};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// The payload of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A JSON document, serialized by the transport.
    Json(Value),
    /// An already serialized payload, sent verbatim (e.g. NDJSON).
    Raw(String),
}

impl Body {
    /// The serialized payload.
    pub fn to_text(&self) -> String {
        match self {
            Body::Json(value) => value.to_string(),
            Body::Raw(text) => text.clone(),
        }
    }
}

/// Everything a transport needs to perform one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// The path without a leading `/`, identifiers already escaped. Empty for the root.
    pub path: String,
    /// Validated query parameters, values not yet rendered.
    pub params: Map<String, Value>,
    pub body: Option<Body>,
    pub headers: Headers,
    /// Error statuses the caller wants treated as regular responses.
    pub ignore: Vec<u16>,
}

impl Request {
    /// Renders the query parameters as `(name, value)` pairs, see [`query_value`].
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(name, value)| (name.clone(), query_value(value)))
            .collect()
    }

    /// Value of a header, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// Renders a parameter value for the query string.
///
/// Strings are used verbatim, other scalars by their JSON text and lists are comma-joined.
/// `null` renders as an empty value.
pub fn query_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(query_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Sets a header, replacing every existing header with the same (case-insensitive) name.
pub fn merge_header(headers: &mut Headers, name: &str, value: &str) {
    headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value.to_string()));
}

/// Last value of a header, compared case-insensitively.
pub fn find_header<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .rev()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Parses the `ignore` option: a status code, a list of them, or a comma-separated string.
///
/// Entries that are not valid status codes are skipped.
pub fn parse_ignore(value: &Value) -> Vec<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()).into_iter().collect(),
        Value::String(s) => s
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect(),
        Value::Array(items) => items.iter().flat_map(parse_ignore).collect(),
        _ => Vec::new(),
    }
}

/// What a transport returns for a completed call.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    /// The parsed body: JSON when the server sent JSON, a string otherwise, `null` when empty.
    pub body: Value,
}
