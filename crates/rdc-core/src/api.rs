//! Shared entry point for resource services (listings, businesses, posts, ...).
//!
//! Wraps the single process-wide executor with a base URL, query building for
//! list endpoints, and JSON (de)serialization of payloads. Resource services
//! hold a clone and only supply paths, payloads and operation names.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::executor::RetryingExecutor;
use crate::page::{decode_page_as, PaginatedResult};
use crate::query::{with_query, Filter};
use crate::request::{HttpMethod, RequestDescriptor};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    executor: Arc<RetryingExecutor>,
}

impl ApiClient {
    pub fn new(base_url: &str, executor: Arc<RetryingExecutor>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            executor,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn executor(&self) -> &RetryingExecutor {
        &self.executor
    }

    /// Absolute URL for `path`. Absolute inputs pass through unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: &str,
    ) -> Result<T, ApiError> {
        let descriptor = RequestDescriptor::get(self.url(path), operation);
        self.executor.execute_json(&descriptor).await
    }

    /// GET a list endpoint with `filter` as query string and decode the page envelope.
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: &Filter,
        operation: &str,
    ) -> Result<PaginatedResult<T>, ApiError> {
        let descriptor = RequestDescriptor::get(with_query(&self.url(path), filter), operation);
        self.executor
            .execute(&descriptor, |raw| decode_page_as::<T>(&raw))
            .await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, operation: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(HttpMethod::Post, path, Some(body), operation).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, operation: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(HttpMethod::Put, path, Some(body), operation).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B, operation: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(HttpMethod::Patch, path, Some(body), operation).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: &str,
    ) -> Result<T, ApiError> {
        self.send::<(), T>(HttpMethod::Delete, path, None, operation).await
    }

    /// Any method, optional JSON body.
    pub async fn send<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        operation: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut descriptor = RequestDescriptor::new(method, self.url(path), operation);
        if let Some(payload) = body {
            descriptor = descriptor.with_json(payload).map_err(|e| ApiError::Parse {
                message: format!("Could not encode request body: {e}"),
            })?;
        }
        self.executor.execute_json(&descriptor).await
    }
}
