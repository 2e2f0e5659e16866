use thiserror::Error;

/// MCP protocol-related errors
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid tool input: {tool_name} - {reason}")]
    InvalidInput { tool_name: String, reason: String },

    #[error("Tool not found: {tool_name}")]
    ToolNotFound { tool_name: String },

    #[error("Tool already registered: {tool_name}")]
    DuplicateTool { tool_name: String },
}

impl ProtocolError {
    pub fn invalid_input(tool_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            tool_name: tool_name.into(),
            reason: reason.into(),
        }
    }

    pub fn tool_not_found(tool_name: impl Into<String>) -> Self {
        Self::ToolNotFound {
            tool_name: tool_name.into(),
        }
    }

    pub fn duplicate_tool(tool_name: impl Into<String>) -> Self {
        Self::DuplicateTool {
            tool_name: tool_name.into(),
        }
    }
}
