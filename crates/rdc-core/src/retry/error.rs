//! Failure of a single dispatch, before retry classification.

use std::fmt;

use crate::transport::TransportError;

/// Error produced by one attempt (transport failure, non-2xx response, or
/// undecodable body). Classified before the executor decides on a retry.
#[derive(Debug)]
pub enum AttemptError {
    /// No complete response was received.
    Transport(TransportError),
    /// Response had a non-2xx status. `message` is the server-provided
    /// message when present, else `"HTTP {status}: {reason}"`.
    Http { status: u16, message: String },
    /// A 2xx body that is not the expected JSON.
    Parse(String),
}

impl AttemptError {
    /// Message suitable for showing to a user unchanged.
    pub fn message(&self) -> String {
        match self {
            AttemptError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Transport(e) => write!(f, "{}", e),
            AttemptError::Http { message, .. } => write!(f, "{}", message),
            AttemptError::Parse(msg) => write!(f, "Invalid response from server: {}", msg),
        }
    }
}

impl std::error::Error for AttemptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AttemptError::Transport(e) => Some(e),
            AttemptError::Http { .. } | AttemptError::Parse(_) => None,
        }
    }
}

impl From<TransportError> for AttemptError {
    fn from(e: TransportError) -> Self {
        AttemptError::Transport(e)
    }
}
