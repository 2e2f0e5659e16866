use openbb_docs_core::{error::NetworkError, ErrorBuilder, Result};
use reqwest::{header::RETRY_AFTER, Response};
use std::time::Duration;
use tracing::warn;

/// Longest slice of an error body kept in error messages
const ERROR_BODY_PREVIEW: usize = 200;

/// Standard HTTP response handling: pass 2xx through, turn anything else into an error
pub(crate) async fn handle_http_response(response: Response, context: &str) -> Result<Response> {
    let status = response.status();
    let url = response.url().clone();

    if status.is_success() {
        return Ok(response);
    }

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok());
    let body = response.text().await.unwrap_or_default();

    warn!(
        url = %url,
        status = %status,
        context = %context,
        "HTTP request failed"
    );

    let error = match status.as_u16() {
        429 => ErrorBuilder::network().rate_limit(retry_after),
        code => {
            let preview = body_preview(&body);
            let message = if preview.is_empty() {
                format!("{context}: HTTP {status}")
            } else {
                format!("{context}: HTTP {status}: {preview}")
            };
            ErrorBuilder::network().http_request(message, Some(code))
        }
    };
    Err(error)
}

/// Classify a transport-level failure, separating timeouts from other errors
pub(crate) fn map_request_error(error: reqwest::Error, timeout: Duration, context: &str) -> NetworkError {
    if error.is_timeout() {
        warn!(
            context = %context,
            timeout_secs = timeout.as_secs(),
            "HTTP request timed out"
        );
        NetworkError::timeout(timeout.as_secs())
    } else {
        warn!(context = %context, error = %error, "HTTP request failed to complete");
        NetworkError::Reqwest(error)
    }
}

fn body_preview(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_PREVIEW) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
