use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use openbb_docs_client::DocsClient;
use openbb_docs_core::{constants::MAX_SECTIONS_LIMIT, Error, ErrorBuilder};

pub mod discover;
pub mod fetch_content;
pub mod identify;
pub mod instructions;

// Re-export tools for convenience
pub use discover::DiscoverSectionsTool;
pub use fetch_content::FetchContentTool;
pub use identify::IdentifySectionsTool;

#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Run the tool. Domain failures come back as `success: false` values;
    /// `Err` is reserved for results that cannot be serialized.
    async fn execute(&self, params: Value, client: &Arc<DocsClient>) -> Result<Value>;

    fn description(&self) -> &str;
    fn parameters_schema(&self) -> Value;
}

/// Validated tool input
pub trait ToolInput: DeserializeOwned {
    fn validate(&self) -> Result<(), Error>;
}

/// Deserialize and validate tool arguments, with the tool name in any error message
pub fn parse_input<T: ToolInput>(params: Value, tool_name: &str) -> Result<T, Error> {
    let input: T = serde_json::from_value(params).map_err(|e| {
        ErrorBuilder::protocol().invalid_input(tool_name, format!("Failed to parse parameters: {e}"))
    })?;
    input.validate()?;
    Ok(input)
}

/// Shared parameter checks
pub struct ParameterValidator;

impl ParameterValidator {
    pub fn validate_non_blank(value: &str, field: &str, tool_name: &str) -> Result<(), Error> {
        if value.trim().is_empty() {
            return Err(ErrorBuilder::protocol()
                .invalid_input(tool_name, format!("'{field}' cannot be empty")));
        }
        Ok(())
    }

    pub fn validate_max_sections(max_sections: Option<usize>, tool_name: &str) -> Result<(), Error> {
        match max_sections {
            Some(n) if n == 0 || n > MAX_SECTIONS_LIMIT => Err(ErrorBuilder::protocol().invalid_input(
                tool_name,
                format!("'max_sections' must be between 1 and {MAX_SECTIONS_LIMIT}, got {n}"),
            )),
            _ => Ok(()),
        }
    }
}
