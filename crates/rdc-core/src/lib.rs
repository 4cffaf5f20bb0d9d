//! Resilient remote data client.
//!
//! Gates calls on network reachability, attaches bearer-token auth, retries
//! retryable failures with linear backoff, and decodes paginated list
//! envelopes. Resource services build a `RequestDescriptor` (or go through
//! `ApiClient`) and hand it to the shared `RetryingExecutor`.

pub mod config;
pub mod logging;

pub mod api;
pub mod auth;
pub mod connectivity;
pub mod error;
pub mod executor;
pub mod page;
pub mod query;
pub mod request;
pub mod retry;
pub mod session_store;
pub mod transport;

pub use api::ApiClient;
pub use error::ApiError;
pub use executor::RetryingExecutor;
pub use page::PaginatedResult;
pub use query::Filter;
pub use request::{HttpMethod, RequestDescriptor};
