use thiserror::Error;

/// Failures while fetching an upstream document
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {message}")]
    HttpRequest {
        message: String,
        status: Option<u16>,
    },

    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Rate limit exceeded")]
    RateLimit { retry_after: Option<u64> },
}

impl NetworkError {
    pub fn http_request(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::HttpRequest {
            message: message.into(),
            status,
        }
    }

    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    pub fn rate_limit(retry_after: Option<u64>) -> Self {
        Self::RateLimit { retry_after }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            NetworkError::HttpRequest { status: Some(s), .. } if *s >= 500,
        ) || matches!(
            self,
            NetworkError::Timeout { .. } | NetworkError::RateLimit { .. }
        )
    }

    /// Check if this error is temporary
    pub fn is_temporary(&self) -> bool {
        matches!(
            self,
            NetworkError::Timeout { .. } | NetworkError::RateLimit { .. }
        )
    }
}
