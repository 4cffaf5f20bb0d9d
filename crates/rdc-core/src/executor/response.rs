//! Turn a raw response into JSON or an attempt error.

use serde_json::Value;

use crate::retry::AttemptError;
use crate::transport::RawResponse;

/// The `message` field of an error body: a string, or a list of strings
/// (validation errors) joined with ", ".
pub(crate) fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("message")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}

/// 2xx bodies parse as JSON (empty = null); anything else becomes an
/// `AttemptError::Http` carrying the most useful message available.
pub(crate) fn interpret(resp: RawResponse) -> Result<Value, AttemptError> {
    if !resp.is_success() {
        let message = server_message(&resp.body).unwrap_or_else(|| {
            if resp.status_text.is_empty() {
                format!("HTTP {}", resp.status)
            } else {
                format!("HTTP {}: {}", resp.status, resp.status_text)
            }
        });
        return Err(AttemptError::Http {
            status: resp.status,
            message,
        });
    }

    if resp.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&resp.body).map_err(|e| AttemptError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resp(status: u16, status_text: &str, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: status_text.to_string(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn success_body_parses() {
        let v = interpret(resp(200, "OK", r#"{"id":3}"#)).unwrap();
        assert_eq!(v, json!({"id": 3}));
    }

    #[test]
    fn empty_success_body_is_null() {
        assert_eq!(interpret(resp(204, "No Content", "")).unwrap(), Value::Null);
    }

    #[test]
    fn malformed_success_body_is_parse_error() {
        let err = interpret(resp(200, "OK", "<html>oops</html>")).unwrap_err();
        assert!(matches!(err, AttemptError::Parse(_)));
    }

    #[test]
    fn error_uses_server_message() {
        let body = r#"{"message":"Listing not found"}"#;
        let err = interpret(resp(404, "Not Found", body)).unwrap_err();
        match err {
            AttemptError::Http { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Listing not found");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn error_joins_validation_messages() {
        let body = r#"{"statusCode":400,
            "message":["title should not be empty","price must be a number"]}"#;
        let err = interpret(resp(400, "Bad Request", body)).unwrap_err();
        assert_eq!(err.message(), "title should not be empty, price must be a number");
    }

    #[test]
    fn error_without_message_synthesizes_status_line() {
        let err = interpret(resp(502, "Bad Gateway", "<html>bad gateway</html>")).unwrap_err();
        assert_eq!(err.message(), "HTTP 502: Bad Gateway");
        let err = interpret(resp(500, "", "")).unwrap_err();
        assert_eq!(err.message(), "HTTP 500");
    }
}
