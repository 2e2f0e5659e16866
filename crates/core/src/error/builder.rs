use super::{ConfigError, DocsError, Error, NetworkError, ProtocolError};

/// Builder for creating errors with a fluent API
pub struct ErrorBuilder;

impl ErrorBuilder {
    /// Upstream fetch errors
    pub fn network() -> NetworkErrorBuilder {
        NetworkErrorBuilder
    }

    /// Documentation errors
    pub fn docs() -> DocsErrorBuilder {
        DocsErrorBuilder
    }

    /// Configuration errors
    pub fn config() -> ConfigErrorBuilder {
        ConfigErrorBuilder
    }

    /// Protocol errors
    pub fn protocol() -> ProtocolErrorBuilder {
        ProtocolErrorBuilder
    }
}

pub struct NetworkErrorBuilder;

impl NetworkErrorBuilder {
    pub fn http_request(self, message: impl Into<String>, status: Option<u16>) -> Error {
        NetworkError::http_request(message, status).into()
    }

    pub fn rate_limit(self, retry_after: Option<u64>) -> Error {
        NetworkError::rate_limit(retry_after).into()
    }
}

pub struct DocsErrorBuilder;

impl DocsErrorBuilder {
    pub fn parse_error(self, reason: impl Into<String>) -> Error {
        DocsError::parse_error(reason).into()
    }
}

pub struct ConfigErrorBuilder;

impl ConfigErrorBuilder {
    pub fn invalid_field(self, field: impl Into<String>, reason: impl Into<String>) -> Error {
        ConfigError::invalid_field(field, reason).into()
    }

    pub fn missing_field(self, field: impl Into<String>) -> Error {
        ConfigError::missing_field(field).into()
    }

    pub fn out_of_range(
        self,
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Error {
        ConfigError::out_of_range(field, value, expected).into()
    }

    pub fn file_not_found(self, path: impl Into<String>) -> Error {
        ConfigError::file_not_found(path).into()
    }

    pub fn parse_error(self, reason: impl Into<String>) -> Error {
        ConfigError::parse_error(reason).into()
    }

    pub fn invalid_env_var(self, var_name: impl Into<String>, value: impl Into<String>) -> Error {
        ConfigError::invalid_env_var(var_name, value).into()
    }
}

pub struct ProtocolErrorBuilder;

impl ProtocolErrorBuilder {
    pub fn invalid_input(self, tool_name: impl Into<String>, reason: impl Into<String>) -> Error {
        ProtocolError::invalid_input(tool_name, reason).into()
    }

    pub fn tool_not_found(self, tool_name: impl Into<String>) -> Error {
        ProtocolError::tool_not_found(tool_name).into()
    }

    pub fn duplicate_tool(self, tool_name: impl Into<String>) -> Error {
        ProtocolError::duplicate_tool(tool_name).into()
    }
}
