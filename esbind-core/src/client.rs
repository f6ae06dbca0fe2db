//! # esbind Client
//!
//! This module implements the entry point for calling remote actions.
//!
//! A [`Client`] pairs a [`Transport`] with the [`ParameterValidation`] mode used by every
//! action it performs. Top-level actions (`bulk`, `search`, `get`, ...) are methods of the
//! client itself; namespaced ones are reached through borrowed handles:
//!
//! * [`Client::cat`]: compact, human oriented listings (`_cat/...`).
//! * [`Client::indices`]: index management.
//! * [`Client::ml`]: machine learning jobs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use esbind_core::{Arguments, Client};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect("http://localhost:9200")?;
//!
//! client
//!     .bulk(
//!         &Arguments::new().arg("index", "books").body(json!([
//!             { "index": { "_id": 1 } },
//!             { "title": "Dune" },
//!         ])),
//!     )
//!     .await?;
//!
//! let shards = client.cat().shards(&Arguments::new().arg("index", "books")).await?;
//! # Ok(())
//! # }
//! ```
use crate::{
    arguments::ArgumentError,
    params::ParameterValidation,
    request::{Request, Response},
    transport::{
        Transport,
        http::{ClientConnectError, HttpTransport},
    },
};
use tracing::debug;

/// Errors returned by every action.
///
/// Argument errors are raised locally before any network activity. Transport errors are
/// passed through exactly as the transport produced them.
#[derive(Debug, thiserror::Error)]
pub enum ActionError<E> {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error(transparent)]
    Transport(E),
}

impl<E> ActionError<E> {
    /// The transport error, if the call made it that far.
    pub fn transport_error(&self) -> Option<&E> {
        match self {
            ActionError::Transport(e) => Some(e),
            ActionError::Argument(_) => None,
        }
    }
}

/// The main client for calling remote actions.
///
/// The generic parameter `T` is the transport every request is delegated to.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
    validation: ParameterValidation,
}

impl Client<HttpTransport> {
    /// Creates a client talking HTTP to `url`, with strict parameter validation.
    ///
    /// No connection is opened until the first request.
    pub fn connect(url: &str) -> Result<Self, ClientConnectError> {
        Ok(Self::new(HttpTransport::new(url)?))
    }
}

impl<T> Client<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            validation: ParameterValidation::default(),
        }
    }

    /// Sets how actions of this client treat unknown parameters.
    pub fn with_parameter_validation(mut self, validation: ParameterValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn parameter_validation(&self) -> ParameterValidation {
        self.validation
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Client<T> {
    /// Sends an already assembled request through the transport.
    pub async fn perform_request(
        &self,
        request: Request,
    ) -> Result<Response, ActionError<T::Error>> {
        debug!(method = %request.method, path = %request.path, "dispatching request");

        self.transport
            .perform_request(request)
            .await
            .map_err(ActionError::Transport)
    }

    pub fn cat(&self) -> Cat<'_, T> {
        Cat { client: self }
    }

    pub fn indices(&self) -> Indices<'_, T> {
        Indices { client: self }
    }

    pub fn ml(&self) -> MachineLearning<'_, T> {
        MachineLearning { client: self }
    }
}

/// Actions under `_cat`.
#[derive(Debug, Clone, Copy)]
pub struct Cat<'a, T> {
    pub(crate) client: &'a Client<T>,
}

/// Index management actions.
#[derive(Debug, Clone, Copy)]
pub struct Indices<'a, T> {
    pub(crate) client: &'a Client<T>,
}

/// Machine learning actions under `_ml`.
#[derive(Debug, Clone, Copy)]
pub struct MachineLearning<'a, T> {
    pub(crate) client: &'a Client<T>,
}
