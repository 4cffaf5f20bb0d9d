//! Parse the reason phrase out of collected response header lines.

/// Reason phrase of the final status line (e.g. "Not Found").
///
/// Redirects produce several status lines; the last one wins. Returns an
/// empty string when there is none (HTTP/2 has no reason phrase).
pub(crate) fn status_text(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| l.starts_with("HTTP/"))
        .last()
        .and_then(|l| l.splitn(3, ' ').nth(2))
        .map(|reason| reason.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_http11() {
        let lines = [
            "HTTP/1.1 404 Not Found".to_string(),
            "Content-Type: application/json".to_string(),
        ];
        assert_eq!(status_text(&lines), "Not Found");
    }

    #[test]
    fn status_text_last_status_line_wins() {
        let lines = [
            "HTTP/1.1 301 Moved Permanently".to_string(),
            "Location: /v2/listings".to_string(),
            "".to_string(),
            "HTTP/1.1 503 Service Unavailable".to_string(),
        ];
        assert_eq!(status_text(&lines), "Service Unavailable");
    }

    #[test]
    fn status_text_http2_has_no_reason() {
        let lines = ["HTTP/2 500".to_string(), "server: nginx".to_string()];
        assert_eq!(status_text(&lines), "");
    }

    #[test]
    fn status_text_no_status_line() {
        assert_eq!(status_text(&[]), "");
    }
}
