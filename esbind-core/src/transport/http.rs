//! # HTTP Transport
//!
//! A minimal [`Transport`] built on `reqwest`.
//!
//! ## How it works
//!
//! * **URL**: The request path is appended to the base URL and the validated parameters are
//!   rendered into the query string.
//! * **Headers**: Default headers are applied first, then the request's own headers, so
//!   per-request values win.
//! * **Body**: JSON bodies are serialized and sent as `application/json` unless the request
//!   sets its own `Content-Type`. Raw bodies are sent verbatim.
//! * **Response**: JSON bodies are parsed, anything else is returned as a string. Error
//!   statuses become [`HttpTransportError::Status`] unless listed in [`Request::ignore`].
//!
//! Pooling and keep-alive come from `reqwest::Client`; nothing is retried here.
use super::Transport;
use crate::{
    arguments::Headers,
    request::{CONTENT_TYPE, JSON_CONTENT_TYPE, Request, Response, find_header},
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderName, InvalidHeaderValue};
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, trace};
use url::Url;

/// Errors that can occur when building an [`HttpTransport`].
#[derive(Debug, thiserror::Error)]
pub enum ClientConnectError {
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] url::ParseError),
    #[error("Unsupported URL '{0}': only http and https are supported")]
    UnsupportedScheme(String),
    #[error("Failed to build the HTTP client: '{0}'")]
    Build(#[source] reqwest::Error),
}

/// Errors that can occur while performing a request.
#[derive(Debug, thiserror::Error)]
pub enum HttpTransportError {
    #[error("Invalid request URL '{url}': '{source}'")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Invalid header key '{key}': '{source}'")]
    InvalidHeaderName {
        key: String,
        source: InvalidHeaderName,
    },
    #[error("Invalid header value for key '{key}': '{source}'")]
    InvalidHeaderValue {
        key: String,
        source: InvalidHeaderValue,
    },
    #[error("Request to '{url}' failed: '{source}'")]
    Request { url: String, source: reqwest::Error },
    #[error("Failed to read the response body: '{0}'")]
    Body(#[source] reqwest::Error),
    #[error("Refusing to send a request to '{path}': '.' and '..' segments would change the target")]
    DotSegment { path: String },
    #[error("Server returned status {status}: {body}")]
    Status { status: u16, body: Value },
}

/// A [`Transport`] sending requests to a single base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    default_headers: Headers,
}

impl HttpTransport {
    /// Creates a transport with a default `reqwest::Client`.
    ///
    /// # Arguments
    ///
    /// * `url` - The server base URL (e.g. `http://localhost:9200`). A path prefix is kept.
    pub fn new(url: &str) -> Result<Self, ClientConnectError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(ClientConnectError::Build)?;
        Self::with_client(client, url)
    }

    /// Creates a transport on top of a caller-configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, url: &str) -> Result<Self, ClientConnectError> {
        let base_url =
            Url::parse(url).map_err(|e| ClientConnectError::InvalidUrl(url.to_string(), e))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientConnectError::UnsupportedScheme(url.to_string()));
        }

        Ok(Self {
            client,
            base_url,
            default_headers: Headers::new(),
        })
    }

    /// Headers sent with every request, unless the request overrides them.
    pub fn with_default_headers(mut self, headers: Headers) -> Self {
        self.default_headers = headers;
        self
    }

    /// The full URL of a request: base URL, path and rendered query string.
    ///
    /// URL parsing resolves `.` and `..` segments (escaped or not), which would send the
    /// request to another resource, so paths containing them are rejected.
    pub fn url_for(&self, request: &Request) -> Result<Url, HttpTransportError> {
        if request.path.split('/').any(is_dot_segment) {
            return Err(HttpTransportError::DotSegment {
                path: request.path.clone(),
            });
        }

        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            request.path
        );
        let mut url = Url::parse(&raw)
            .map_err(|source| HttpTransportError::InvalidUrl { url: raw, source })?;

        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    fn header_map(&self, request: &Request) -> Result<HeaderMap, HttpTransportError> {
        let mut map = HeaderMap::new();

        for (k, v) in self.default_headers.iter().chain(request.headers.iter()) {
            let key = HeaderName::from_str(k).map_err(|source| {
                HttpTransportError::InvalidHeaderName {
                    key: k.clone(),
                    source,
                }
            })?;
            let val = HeaderValue::from_str(v).map_err(|source| {
                HttpTransportError::InvalidHeaderValue {
                    key: k.clone(),
                    source,
                }
            })?;
            map.insert(key, val);
        }

        if request.body.is_some()
            && find_header(&request.headers, CONTENT_TYPE).is_none()
            && find_header(&self.default_headers, CONTENT_TYPE).is_none()
        {
            map.insert(
                reqwest::header::CONTENT_TYPE,
                HeaderValue::from_static(JSON_CONTENT_TYPE),
            );
        }

        Ok(map)
    }
}

impl Transport for HttpTransport {
    type Error = HttpTransportError;

    async fn perform_request(&self, request: Request) -> Result<Response, HttpTransportError> {
        let url = self.url_for(&request)?;
        let headers = self.header_map(&request)?;

        debug!(method = %request.method, url = %url, "performing request");

        let mut builder = self
            .client
            .request(request.method.clone(), url.clone())
            .headers(headers);

        if let Some(body) = &request.body {
            builder = builder.body(body.to_text());
        }

        let response = builder
            .send()
            .await
            .map_err(|source| HttpTransportError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let text = response.text().await.map_err(HttpTransportError::Body)?;
        let body = parse_body(&text);

        trace!(status, "received response");

        if status >= 400 && !request.ignore.contains(&status) {
            return Err(HttpTransportError::Status { status, body });
        }

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

fn is_dot_segment(segment: &str) -> bool {
    let segment = segment.to_ascii_lowercase().replace("%2e", ".");
    segment == "." || segment == ".."
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
