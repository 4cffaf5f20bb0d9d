//! Errors surfaced to resource services.
//!
//! Terminal failures carry the server's (or classifier's) message verbatim so
//! it can be shown to the user as-is. Retryable failures only surface once the
//! retry budget is spent, as `Exhausted`, naming the operation and attempt count.

use crate::retry::{AttemptError, ErrorClass};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The connectivity gate reported the device offline.
    #[error("No internet connection. Please check your network and try again.")]
    NetworkUnavailable,

    /// 4xx other than 401/403.
    #[error("{message}")]
    Client { status: u16, message: String },

    /// 401 or 403.
    #[error("{message}")]
    Auth { status: u16, message: String },

    /// The response body was not what the caller expected.
    #[error("{message}")]
    Parse { message: String },

    /// Every attempt failed with a retryable error.
    #[error("Failed to {operation} after {attempts} attempts. Please try again later.")]
    Exhausted {
        operation: String,
        attempts: u32,
        class: ErrorClass,
        #[source]
        last: AttemptError,
    },
}

impl ApiError {
    /// Terminal error for a failure the policy refused to retry.
    pub(crate) fn terminal(
        class: ErrorClass,
        cause: AttemptError,
        operation: &str,
        attempts: u32,
    ) -> Self {
        match class {
            ErrorClass::AuthError(status) => ApiError::Auth {
                status,
                message: cause.message(),
            },
            ErrorClass::ClientError(status) => ApiError::Client {
                status,
                message: cause.message(),
            },
            ErrorClass::ParseError => ApiError::Parse {
                message: cause.message(),
            },
            ErrorClass::NetworkUnavailable | ErrorClass::ServerError(_) | ErrorClass::Unknown => {
                ApiError::Exhausted {
                    operation: operation.to_string(),
                    attempts,
                    class,
                    last: cause,
                }
            }
        }
    }

    /// Class of the underlying failure, if it came from a dispatched attempt.
    pub fn class(&self) -> Option<ErrorClass> {
        match self {
            ApiError::NetworkUnavailable => Some(ErrorClass::NetworkUnavailable),
            ApiError::Client { status, .. } => Some(ErrorClass::ClientError(*status)),
            ApiError::Auth { status, .. } => Some(ErrorClass::AuthError(*status)),
            ApiError::Parse { .. } => Some(ErrorClass::ParseError),
            ApiError::Exhausted { class, .. } => Some(*class),
        }
    }

    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        self.class().and_then(|c| c.status())
    }

    /// True for 401/403; callers use this to start re-authentication.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }
}
