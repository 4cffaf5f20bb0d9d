//! Classify HTTP statuses and transport failures into retry error classes.

use crate::retry::error::AttemptError;
use crate::retry::policy::ErrorClass;
use crate::transport::TransportError;

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u16) -> ErrorClass {
    match code {
        401 | 403 => ErrorClass::AuthError(code),
        400..=499 => ErrorClass::ClientError(code),
        500..=599 => ErrorClass::ServerError(Some(code)),
        _ => ErrorClass::Unknown,
    }
}

/// Classify a transport failure.
///
/// Failures before any byte left the device mean there is no network path;
/// failures after sending (timeout, reset, empty reply) are treated like a
/// server-side error without a status.
pub fn classify_transport_error(e: &TransportError) -> ErrorClass {
    match e {
        TransportError::Unreachable(_) => ErrorClass::NetworkUnavailable,
        TransportError::Interrupted(_) | TransportError::TimedOut(_) => {
            ErrorClass::ServerError(None)
        }
        TransportError::Other(_) => ErrorClass::Unknown,
    }
}

/// Classify an attempt error into an ErrorClass.
pub fn classify(e: &AttemptError) -> ErrorClass {
    match e {
        AttemptError::Transport(te) => classify_transport_error(te),
        AttemptError::Http { status, .. } => classify_http_status(*status),
        AttemptError::Parse(_) => ErrorClass::ParseError,
    }
}
