//! HTTP transport seam.
//!
//! The executor hands a fully prepared request (method, URL, headers, body
//! bytes) to a `Transport` and gets back the raw status line and body. The
//! production implementation drives libcurl; tests substitute scripted fakes.

mod easy;
mod parse;

pub use easy::CurlTransport;
pub(crate) use parse::status_text;

use async_trait::async_trait;
use std::time::Duration;

use crate::request::HttpMethod;

/// A request ready to go on the wire.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    /// Upper bound on the whole exchange.
    pub timeout: Duration,
}

impl PreparedRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response as received, before status interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    /// Reason phrase from the status line (empty for HTTP/2).
    pub status_text: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain a response at all.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Nothing left the device: DNS failure, connection refused, no route.
    #[error("server unreachable: {0}")]
    Unreachable(String),
    /// The connection broke after the request was sent.
    #[error("connection interrupted: {0}")]
    Interrupted(String),
    /// No complete response within the per-attempt timeout.
    #[error("request timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),
    #[error("transport failure: {0}")]
    Other(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError>;
}
