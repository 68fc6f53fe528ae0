//! Request and response logging with redaction of credential headers.

use tracing::{debug, info, trace};

const TARGET: &str = "recotem::client";

/// Checks if a header name should be redacted
#[must_use]
pub fn should_redact_header(header_name: &str) -> bool {
    let lower = header_name.to_lowercase();
    matches!(
        lower.as_str(),
        "authorization" | "x-api-key" | "cookie" | "set-cookie" | "proxy-authorization"
    )
}

fn log_headers(label: &str, headers: &reqwest::header::HeaderMap) {
    debug!(target: TARGET, "{label}:");
    for (name, value) in headers {
        let header_str = name.as_str();
        let display_value = if should_redact_header(header_str) {
            "[REDACTED]".to_string()
        } else {
            String::from_utf8_lossy(value.as_bytes()).to_string()
        };
        debug!(target: TARGET, "  {}: {}", header_str, display_value);
    }
}

/// Logs an outgoing request; headers at debug level, body at trace level.
pub fn log_request(
    method: &reqwest::Method,
    url: &str,
    headers: Option<&reqwest::header::HeaderMap>,
    body: Option<&str>,
) {
    info!(target: TARGET, "→ {} {}", method, url);

    if let Some(header_map) = headers {
        log_headers("Request headers", header_map);
    }
    if let Some(body_content) = body {
        trace!(target: TARGET, "Request body: {}", body_content);
    }
}

/// Logs a response status with its timing, then headers and a truncated body.
pub fn log_response(
    status: reqwest::StatusCode,
    duration_ms: u128,
    headers: Option<&reqwest::header::HeaderMap>,
    body: Option<&str>,
    max_body_len: usize,
) {
    info!(target: TARGET, "← {} ({}ms)", status, duration_ms);

    if let Some(header_map) = headers {
        log_headers("Response headers", header_map);
    }
    log_response_body(body, max_body_len);
}

fn log_response_body(body: Option<&str>, max_body_len: usize) {
    let Some(body_content) = body else {
        return;
    };

    if body_content.len() <= max_body_len {
        trace!(target: TARGET, "Response body: {}", body_content);
        return;
    }

    let mut cut = max_body_len;
    while !body_content.is_char_boundary(cut) {
        cut -= 1;
    }
    trace!(
        target: TARGET,
        "Response body: {} (truncated at {} chars)",
        &body_content[..cut],
        max_body_len
    );
}

/// Gets the maximum logged body length from `RECOTEM_LOG_MAX_BODY`
#[must_use]
pub fn get_max_body_len() -> usize {
    std::env::var("RECOTEM_LOG_MAX_BODY")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_redact_header_authorization() {
        assert!(should_redact_header("Authorization"));
        assert!(should_redact_header("AUTHORIZATION"));
        assert!(should_redact_header("authorization"));
    }

    #[test]
    fn test_should_redact_header_api_key() {
        assert!(should_redact_header("X-API-Key"));
        assert!(should_redact_header("x-api-key"));
    }

    #[test]
    fn test_should_not_redact_regular_header() {
        assert!(!should_redact_header("Content-Type"));
        assert!(!should_redact_header("User-Agent"));
        assert!(!should_redact_header("Accept"));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // Multi-byte body cut in the middle of a character must not panic.
        log_response_body(Some("ééééé"), 3);
    }

    #[test]
    fn test_get_max_body_len_default() {
        std::env::remove_var("RECOTEM_LOG_MAX_BODY");
        assert_eq!(get_max_body_len(), 1000);
    }
}
