//! Retrying request executor.
//!
//! One instance is built at startup from its collaborators (transport,
//! connectivity gate, token provider, policy) and shared by every resource
//! service. Calls are independent: each has its own attempt counter and no
//! state is shared between them beyond the read-only collaborators.

mod response;
mod run;


use std::sync::Arc;
use std::time::Duration;

use crate::auth::AuthTokenProvider;
use crate::config::{AuthHeaderMode, ClientConfig};
use crate::connectivity::ConnectivityGate;
use crate::retry::RetryPolicy;
use crate::transport::Transport;

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct RetryingExecutor {
    transport: Arc<dyn Transport>,
    gate: Arc<dyn ConnectivityGate>,
    tokens: Arc<dyn AuthTokenProvider>,
    policy: RetryPolicy,
    timeout: Duration,
    auth_header: AuthHeaderMode,
}

impl RetryingExecutor {
    pub fn new(
        transport: Arc<dyn Transport>,
        gate: Arc<dyn ConnectivityGate>,
        tokens: Arc<dyn AuthTokenProvider>,
    ) -> Self {
        Self {
            transport,
            gate,
            tokens,
            policy: RetryPolicy::default(),
            timeout: DEFAULT_TIMEOUT,
            auth_header: AuthHeaderMode::default(),
        }
    }

    /// Executor with policy, timeout and auth-header mode taken from config.
    pub fn from_config(
        cfg: &ClientConfig,
        transport: Arc<dyn Transport>,
        gate: Arc<dyn ConnectivityGate>,
        tokens: Arc<dyn AuthTokenProvider>,
    ) -> Self {
        Self::new(transport, gate, tokens)
            .with_policy(RetryPolicy::from_config(&cfg.retry_or_default()))
            .with_timeout(cfg.timeout())
            .with_auth_header(cfg.auth_header)
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_auth_header(mut self, mode: AuthHeaderMode) -> Self {
        self.auth_header = mode;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for RetryingExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryingExecutor")
            .field("policy", &self.policy)
            .field("timeout", &self.timeout)
            .field("auth_header", &self.auth_header)
            .finish_non_exhaustive()
    }
}
