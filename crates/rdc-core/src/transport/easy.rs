//! libcurl transport: one Easy handle per attempt, run on the blocking pool.

use async_trait::async_trait;
use std::str;
use std::time::Duration;

use super::{status_text, PreparedRequest, RawResponse, Transport, TransportError};

/// Transport backed by the curl crate (libcurl).
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    connect_timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
        }
    }
}

impl CurlTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap on connection setup; the request timeout still bounds the whole exchange.
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

#[async_trait]
impl Transport for CurlTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        let connect_timeout = self.connect_timeout;
        tokio::task::spawn_blocking(move || perform(&request, connect_timeout))
            .await
            .map_err(|e| TransportError::Other(format!("transport task join: {e}")))?
    }
}

/// Map a curl error onto the transport failure it represents.
pub(crate) fn classify_curl_error(e: curl::Error, timeout: Duration) -> TransportError {
    if e.is_operation_timedout() {
        return TransportError::TimedOut(timeout);
    }
    if e.is_couldnt_connect() || e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return TransportError::Unreachable(e.to_string());
    }
    if e.is_read_error() || e.is_recv_error() || e.is_send_error() || e.is_got_nothing() {
        return TransportError::Interrupted(e.to_string());
    }
    TransportError::Other(e.to_string())
}

/// Performs the request on the current thread.
fn perform(
    req: &PreparedRequest,
    connect_timeout: Duration,
) -> Result<RawResponse, TransportError> {
    let fail = |e: curl::Error| classify_curl_error(e, req.timeout);
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&req.url).map_err(fail)?;
    easy.custom_request(req.method.as_str()).map_err(fail)?;
    easy.follow_location(true).map_err(fail)?;
    easy.connect_timeout(connect_timeout.min(req.timeout)).map_err(fail)?;
    easy.timeout(req.timeout).map_err(fail)?;

    let mut list = curl::easy::List::new();
    for (k, v) in &req.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim())).map_err(fail)?;
    }
    easy.http_headers(list).map_err(fail)?;

    if let Some(payload) = &req.body {
        easy.post_fields_copy(payload).map_err(fail)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })
            .map_err(fail)?;
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(fail)?;
        transfer.perform().map_err(fail)?;
    }

    let code = easy.response_code().map_err(fail)?;
    let status = u16::try_from(code)
        .map_err(|_| TransportError::Other(format!("invalid response code {code}")))?;

    Ok(RawResponse {
        status,
        status_text: status_text(&header_lines),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(30);

    #[test]
    fn curl_timeout_maps_to_timed_out() {
        // CURLE_OPERATION_TIMEDOUT
        let e = classify_curl_error(curl::Error::new(28), TIMEOUT);
        assert!(matches!(e, TransportError::TimedOut(d) if d == TIMEOUT));
    }

    #[test]
    fn curl_connect_failures_are_unreachable() {
        // CURLE_COULDNT_RESOLVE_HOST, CURLE_COULDNT_CONNECT
        for code in [6, 7] {
            let e = classify_curl_error(curl::Error::new(code), TIMEOUT);
            assert!(matches!(e, TransportError::Unreachable(_)), "code {code}");
        }
    }

    #[test]
    fn curl_mid_transfer_failures_are_interrupted() {
        // CURLE_GOT_NOTHING, CURLE_SEND_ERROR, CURLE_RECV_ERROR
        for code in [52, 55, 56] {
            let e = classify_curl_error(curl::Error::new(code), TIMEOUT);
            assert!(matches!(e, TransportError::Interrupted(_)), "code {code}");
        }
    }

    #[test]
    fn other_curl_errors() {
        // CURLE_URL_MALFORMAT
        let e = classify_curl_error(curl::Error::new(3), TIMEOUT);
        assert!(matches!(e, TransportError::Other(_)));
    }
}
