//! # Action Arguments
//!
//! The options a caller passes to a single action.
//!
//! Named options are stored as `serde_json::Value`s so that any scalar or list can be
//! forwarded as a query parameter. The request body and custom headers are kept apart
//! from the named options: they never end up in the query string.
use serde_json::{Map, Value};

/// Custom HTTP headers, as ordered `(name, value)` pairs.
pub type Headers = Vec<(String, String)>;

/// Name under which a missing request body is reported.
pub const BODY: &str = "body";

/// Errors raised locally, before any network activity, while assembling a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Required argument '{0}' missing")]
    MissingArgument(&'static str),
    #[error("URL parameter '{0}' is not supported")]
    UnsupportedParameter(String),
}

/// Caller-supplied options of one action call.
///
/// ```rust
/// use esbind_core::Arguments;
///
/// let arguments = Arguments::new()
///     .arg("index", "my-index")
///     .arg("refresh", true)
///     .header("X-Opaque-Id", "trace-1")
///     .body(serde_json::json!({ "field": "value" }));
///
/// assert!(arguments.contains("index"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    options: Map<String, Value>,
    body: Option<Value>,
    headers: Headers,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a named option, replacing any previous value for the same name.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Sets the request body.
    ///
    /// An array body is treated as a sequence of items by bulk-style actions; a string
    /// body is sent as-is.
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends several custom headers at once.
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Whether an option is present with a non-null value.
    ///
    /// `"body"` refers to the request body.
    pub fn contains(&self, name: &str) -> bool {
        if name == BODY {
            return self.body.as_ref().is_some_and(|body| !body.is_null());
        }
        self.options.get(name).is_some_and(|value| !value.is_null())
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn header_list(&self) -> &Headers {
        &self.headers
    }

    /// Fails with [`ArgumentError::MissingArgument`] unless `name` is present.
    pub fn require(&self, name: &'static str) -> Result<(), ArgumentError> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(ArgumentError::MissingArgument(name))
        }
    }

    /// Removes a named option. A `null` value counts as absent.
    pub(crate) fn take(&mut self, name: &str) -> Option<Value> {
        self.options.remove(name).filter(|value| !value.is_null())
    }

    pub(crate) fn take_body(&mut self) -> Option<Value> {
        self.body.take().filter(|body| !body.is_null())
    }

    pub(crate) fn take_headers(&mut self) -> Headers {
        std::mem::take(&mut self.headers)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Arguments::new(), |arguments, (name, value)| {
                arguments.arg(name, value)
            })
    }
}
