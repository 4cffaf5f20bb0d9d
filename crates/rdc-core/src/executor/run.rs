//! Attempt loop: gate, dispatch, classify, back off.
//!
//! Attempt index `n` starts at 0. Each pass checks connectivity (it may have
//! changed during the backoff), re-reads the token and dispatches. A failure
//! is classified and the policy picks one of: surface it (terminal class),
//! sleep `base * (n + 1)` and go again, or give up (budget spent).

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;

use super::response;
use super::RetryingExecutor;
use crate::config::AuthHeaderMode;
use crate::error::ApiError;
use crate::request::RequestDescriptor;
use crate::retry::{classify, AttemptError, RetryDecision};
use crate::transport::{PreparedRequest, TransportError};

impl RetryingExecutor {
    /// Execute `descriptor` and decode the JSON body of the successful
    /// response with `decode`. A decode failure is a terminal parse error.
    pub async fn execute<T, E, F>(
        &self,
        descriptor: &RequestDescriptor,
        decode: F,
    ) -> Result<T, ApiError>
    where
        F: FnOnce(Value) -> Result<T, E>,
        E: Display,
    {
        let value = self.execute_value(descriptor).await?;
        decode(value).map_err(|e| {
            tracing::warn!(operation = descriptor.operation(), "response did not decode: {}", e);
            ApiError::Parse {
                message: AttemptError::Parse(e.to_string()).to_string(),
            }
        })
    }

    /// `execute` with serde deserialization into `T`.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<T, ApiError> {
        self.execute(descriptor, serde_json::from_value::<T>).await
    }

    /// Execute `descriptor` and return the raw JSON body (null for an empty body).
    pub async fn execute_value(&self, descriptor: &RequestDescriptor) -> Result<Value, ApiError> {
        let operation = descriptor.operation();
        let mut attempt: u32 = 0;

        loop {
            if !self.gate.is_online().await {
                tracing::warn!(operation, attempt = attempt + 1, "offline, not dispatching");
                return Err(ApiError::NetworkUnavailable);
            }

            let cause = match self.dispatch(descriptor, attempt).await {
                Ok(value) => {
                    tracing::debug!(operation, attempts = attempt + 1, "request succeeded");
                    return Ok(value);
                }
                Err(e) => e,
            };

            let class = classify(&cause);
            match self.policy.decide(attempt, class) {
                RetryDecision::RetryAfter(delay) => {
                    tracing::warn!(
                        operation,
                        attempt = attempt + 1,
                        ?class,
                        "attempt failed: {}; retrying in {:?}",
                        cause,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                RetryDecision::NoRetry => {
                    tracing::info!(operation, ?class, "request failed: {}", cause);
                    return Err(ApiError::terminal(class, cause, operation, attempt + 1));
                }
                RetryDecision::Exhausted => {
                    tracing::warn!(
                        operation,
                        attempts = attempt + 1,
                        ?class,
                        "giving up after last failure: {}",
                        cause
                    );
                    return Err(ApiError::Exhausted {
                        operation: operation.to_string(),
                        attempts: attempt + 1,
                        class,
                        last: cause,
                    });
                }
            }
        }
    }

    async fn dispatch(
        &self,
        descriptor: &RequestDescriptor,
        attempt: u32,
    ) -> Result<Value, AttemptError> {
        let request = self.prepare(descriptor).await;
        tracing::debug!(
            operation = descriptor.operation(),
            method = %request.method,
            url = %request.url,
            attempt = attempt + 1,
            "dispatching request"
        );

        let resp = match tokio::time::timeout(self.timeout, self.transport.send(request)).await {
            Ok(result) => result?,
            Err(_) => return Err(TransportError::TimedOut(self.timeout).into()),
        };
        response::interpret(resp)
    }

    async fn prepare(&self, descriptor: &RequestDescriptor) -> PreparedRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        match self.tokens.token().await {
            Some(token) => headers.push(("Authorization".to_string(), format!("Bearer {token}"))),
            None if self.auth_header == AuthHeaderMode::EmptyBearer => {
                headers.push(("Authorization".to_string(), "Bearer ".to_string()))
            }
            None => {}
        }

        // A `Value` always renders; its Display is compact JSON.
        let body = descriptor.body().map(|v| v.to_string().into_bytes());

        PreparedRequest {
            method: descriptor.method(),
            url: descriptor.url().to_string(),
            headers,
            body,
            timeout: self.timeout,
        }
    }
}
