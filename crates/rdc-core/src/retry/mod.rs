//! Retry and backoff policy.
//!
//! This module encapsulates error classification (auth, client, server,
//! transport and parse failures) and linear backoff decisions so the
//! executor applies one consistent policy to every endpoint.

mod classify;
mod error;
mod policy;

pub use classify::{classify, classify_http_status, classify_transport_error};
pub use error::AttemptError;
pub use policy::{ErrorClass, RetryDecision, RetryPolicy};
