//! # esbind Core
//!
//! `esbind-core` is the foundational library powering the `esbind` CLI. It exposes one
//! callable action per remote search-engine HTTP endpoint and turns the caller's arguments
//! into a request description that a transport can send.
//!
//! ## Key Components
//!
//! * **[`Client`]:** The main entry point. Every action lives on it (or on one of its
//!   namespaces such as [`Client::cat`]) and is dispatched to a generic [`Transport`].
//! * **[`Arguments`]:** The caller-supplied options of a single call: named parameters,
//!   an optional body and custom headers.
//! * **[`Request`] & [`Response`]:** What an action hands to the transport and what it gets
//!   back.
//!
//! ## Request building pipeline
//!
//! Every action is a small instantiation of the same pipeline:
//!
//! * **[`params::registry`]:** A process-wide table of the optional query parameters each
//!   operation recognizes.
//! * **[`params::validate_and_extract`]:** Filters the caller's options down to that table,
//!   failing (strict) or dropping (lenient) anything unknown.
//! * **[`path`]:** Escapes identifiers (indices, ids) and joins them into URL path segments.
//! * **[`bulk`]:** Flattens arrays of bulk items into newline-delimited JSON.
//!
//! ## Transport
//!
//! [`HttpTransport`] is a thin `reqwest` based implementation of [`Transport`]. Connection
//! pooling, retries and cluster discovery are left to the transport; the pipeline never
//! retries and never interprets transport failures.
//!
//! See the README.md for more details about usage.
pub mod actions;
pub mod arguments;
pub mod bulk;
pub mod client;
pub mod params;
pub mod path;
pub mod request;
pub mod transport;

pub use arguments::{ArgumentError, Arguments, Headers};
pub use client::{ActionError, Client};
pub use params::ParameterValidation;
pub use request::{Body, Request, Response};
pub use transport::{Transport, http::HttpTransport};

// Re-exports
pub use http;
pub use serde_json;
