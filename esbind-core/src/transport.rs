//! # Transport
//!
//! The seam between the request-building pipeline and the network.
//!
//! Actions never talk to the network themselves: once a [`Request`] is assembled it is
//! handed to a [`Transport`], and whatever the transport returns (or fails with) is passed
//! back to the caller unmodified.
pub mod http;

use crate::request::{Request, Response};
use std::future::Future;

/// Performs fully assembled requests.
///
/// Implementations own every network concern: connections, TLS, retries, timeouts.
/// They are expected to honor [`Request::ignore`] by returning a [`Response`] for those
/// statuses instead of an error.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn perform_request(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, Self::Error>> + Send;
}
