//! Request descriptors handed to the executor by resource services.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// One logical call: method, absolute URL, optional JSON body, and a
/// human-readable operation name used in diagnostics and the
/// "failed after N attempts" message (e.g. "fetch listings").
///
/// Immutable once built; the executor only borrows it.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: HttpMethod,
    url: String,
    body: Option<serde_json::Value>,
    operation: String,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, url: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            operation: operation.into(),
        }
    }

    pub fn get(url: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url, operation)
    }

    pub fn post(url: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url, operation)
    }

    pub fn put(url: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, url, operation)
    }

    pub fn patch(url: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, url, operation)
    }

    pub fn delete(url: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, url, operation)
    }

    /// Attach an already-built JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `payload` to JSON and attach it as the body.
    pub fn with_json<B: Serialize + ?Sized>(self, payload: &B) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_value(payload)?;
        Ok(self.with_body(body))
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }
}
