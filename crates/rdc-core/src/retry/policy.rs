use std::time::Duration;

use crate::config::RetryConfig;

/// Classification of one failed attempt.
///
/// Derived fresh for every failure; the executor consults it to decide
/// whether another attempt has a chance of succeeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// No network path: nothing left the device (DNS, connect refused upstream, offline).
    NetworkUnavailable,
    /// 4xx other than 401/403. Terminal.
    ClientError(u16),
    /// 5xx, or the transport broke after bytes were sent (timeout, reset).
    /// The status is absent for transport-level failures.
    ServerError(Option<u16>),
    /// A body that could not be decoded. Terminal.
    ParseError,
    /// 401 or 403. Terminal: the same token cannot start working on a retry.
    AuthError(u16),
    /// Anything else; retried.
    Unknown,
}

impl ErrorClass {
    pub fn is_retryable(&self) -> bool {
        match self {
            ErrorClass::NetworkUnavailable | ErrorClass::ServerError(_) | ErrorClass::Unknown => {
                true
            }
            ErrorClass::ClientError(_) | ErrorClass::AuthError(_) | ErrorClass::ParseError => {
                false
            }
        }
    }

    /// HTTP status carried by the class, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ErrorClass::ClientError(s) | ErrorClass::AuthError(s) => Some(*s),
            ErrorClass::ServerError(s) => *s,
            _ => None,
        }
    }
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Terminal failure class; surface it as-is.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
    /// Retryable failure, but the retry budget is spent.
    Exhausted,
}

/// Linear-multiplicative backoff: the retry following attempt index `n`
/// (0-based) waits `base_delay * (n + 1)`, so 1s, 2s, 3s with the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    /// Base delay for backoff.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(cfg: &RetryConfig) -> Self {
        Self {
            max_retries: cfg.max_retries,
            base_delay: Duration::from_millis(cfg.base_delay_ms),
        }
    }

    /// Upper bound on dispatches for one logical call.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before the retry that follows attempt index `attempt`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt.saturating_add(1))
    }

    /// Decide what follows a failed attempt.
    ///
    /// `attempt` is 0-based (0 = first attempt).
    pub fn decide(&self, attempt: u32, class: ErrorClass) -> RetryDecision {
        if !class.is_retryable() {
            return RetryDecision::NoRetry;
        }
        if attempt >= self.max_retries {
            return RetryDecision::Exhausted;
        }
        RetryDecision::RetryAfter(self.backoff(attempt))
    }
}
