mod builder;
mod config;
mod context;
mod docs;
mod network;
mod protocol;

pub use builder::ErrorBuilder;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use docs::DocsError;
pub use network::NetworkError;
pub use protocol::ProtocolError;

use thiserror::Error;

/// Main error type that encompasses all domain-specific errors
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Docs(#[from] DocsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal(message.into())
    }

    /// Check if this error is recoverable (a later call may succeed)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Network(e) => e.is_recoverable(),
            Error::Io(_) => true,
            _ => false,
        }
    }

    /// Check if this error indicates a temporary issue
    pub fn is_temporary(&self) -> bool {
        match self {
            Error::Network(e) => e.is_temporary(),
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Network(_) => ErrorCategory::Network,
            Error::Docs(_) => ErrorCategory::Documentation,
            Error::Config(_) => ErrorCategory::Configuration,
            Error::Protocol(_) => ErrorCategory::Protocol,
            Error::Serialization(_) | Error::UrlParse(_) => ErrorCategory::Data,
            Error::Io(_) => ErrorCategory::Io,
            Error::Internal(_) => ErrorCategory::Internal,
        }
    }
}

/// Error categories for classification in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Network,
    Documentation,
    Data,
    Io,
    Configuration,
    Protocol,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Network => write!(f, "network"),
            ErrorCategory::Documentation => write!(f, "documentation"),
            ErrorCategory::Data => write!(f, "data"),
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::Protocol => write!(f, "protocol"),
            ErrorCategory::Internal => write!(f, "internal"),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err: Error = NetworkError::timeout(30).into();
        assert_eq!(err.category(), ErrorCategory::Network);

        let err: Error = DocsError::section_not_found("Copilot Basics").into();
        assert_eq!(err.category(), ErrorCategory::Documentation);

        let err: Error = ConfigError::missing_field("client.toc_url").into();
        assert_eq!(err.category(), ErrorCategory::Configuration);

        let err: Error = ProtocolError::tool_not_found("nope").into();
        assert_eq!(err.category(), ErrorCategory::Protocol);

        assert_eq!(Error::internal("boom").category(), ErrorCategory::Internal);
        assert_eq!(ErrorCategory::Documentation.to_string(), "documentation");
    }

    #[test]
    fn test_recoverable_errors() {
        let server_error: Error = NetworkError::http_request("upstream failed", Some(500)).into();
        assert!(server_error.is_recoverable());

        let not_found: Error = NetworkError::http_request("missing", Some(404)).into();
        assert!(!not_found.is_recoverable());

        let timeout: Error = NetworkError::timeout(60).into();
        assert!(timeout.is_recoverable());
        assert!(timeout.is_temporary());

        let parse: Error = DocsError::parse_error("bad toc").into();
        assert!(!parse.is_recoverable());
        assert!(!parse.is_temporary());
    }

    #[test]
    fn test_error_display_is_transparent() {
        let err: Error = NetworkError::http_request("TOC fetch: HTTP 500", Some(500)).into();
        assert_eq!(err.to_string(), "HTTP request failed: TOC fetch: HTTP 500");
    }
}
