//! Test doubles shared by the unit tests.

use std::sync::{Arc, Mutex};

use crate::net::api::{HttpResponse, Transport, TransportError};

/// Records every request and answers with a canned response, or fails like
/// an unreachable server when no response is set.
#[derive(Clone, Default)]
pub struct FakeTransport {
    response: Option<HttpResponse>,
    calls: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

impl FakeTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self { response: Some(HttpResponse { status, body: body.to_owned() }), ..Self::default() }
    }

    pub fn offline() -> Self {
        Self::default()
    }

    /// `(url, parsed JSON body)` for each request, in order.
    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push((url.to_owned(), serde_json::from_str(body).unwrap()));
        self.response.clone().ok_or_else(|| TransportError::Request("connection refused".to_owned()))
    }
}
