use esbind_core::{Request, Response, Transport};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
pub struct ConnectionRefused;

// A transport that records every request and answers with a canned response.
#[derive(Debug)]
pub struct RecordingTransport {
    requests: Mutex<Vec<Request>>,
    response: Option<Response>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: Value) -> Self {
        Self {
            requests: Mutex::new(vec![]),
            response: Some(Response {
                status,
                headers: vec![],
                body,
            }),
        }
    }

    pub fn refusing() -> Self {
        Self {
            requests: Mutex::new(vec![]),
            response: None,
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Request {
        self.requests()
            .pop()
            .expect("the transport was never called")
    }
}

impl Transport for RecordingTransport {
    type Error = ConnectionRefused;

    async fn perform_request(&self, request: Request) -> Result<Response, ConnectionRefused> {
        self.requests.lock().unwrap().push(request);
        self.response.clone().ok_or(ConnectionRefused)
    }
}
