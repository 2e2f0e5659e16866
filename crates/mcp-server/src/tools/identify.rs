use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use openbb_docs_client::{DocsClient, TocService};
use openbb_docs_core::{Error, IdentifySectionsResponse};

use super::{
    instructions::SECTION_SELECTION_GUIDELINES, parse_input, ParameterValidator, ToolHandler,
    ToolInput,
};

pub const TOOL_NAME: &str = "identify_openbb_docs_sections";

/// Input parameters for the identify_openbb_docs_sections tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentifyToolInput {
    /// The user's question, used by the assistant to pick sections
    pub user_query: String,
}

impl ToolInput for IdentifyToolInput {
    fn validate(&self) -> Result<(), Error> {
        ParameterValidator::validate_non_blank(&self.user_query, "user_query", TOOL_NAME)
    }
}

/// Returns the unprocessed table of contents so the assistant selects sections itself
pub struct IdentifySectionsTool;

impl IdentifySectionsTool {
    pub fn new() -> Self {
        Self
    }

    async fn identify(&self, params: Value, client: &Arc<DocsClient>) -> IdentifySectionsResponse {
        let raw_query = params
            .get("user_query")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let input: IdentifyToolInput = match parse_input(params, TOOL_NAME) {
            Ok(input) => input,
            Err(e) => return IdentifySectionsResponse::failed(raw_query, e.to_string()),
        };
        let query = input.user_query.trim();

        let service = TocService::new((**client).clone());
        match service.raw_toc().await {
            Ok(raw_toc) => {
                debug!(query = %query, bytes = raw_toc.len(), "Returning raw table of contents");
                IdentifySectionsResponse::found(
                    query,
                    raw_toc,
                    SECTION_SELECTION_GUIDELINES.to_string(),
                )
            }
            Err(e) => {
                warn!(
                    error = %e,
                    category = %e.category(),
                    recoverable = e.is_recoverable(),
                    "Failed to fetch table of contents"
                );
                IdentifySectionsResponse::failed(
                    query,
                    format!("Failed to fetch table of contents: {e}"),
                )
            }
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for IdentifySectionsTool {
    #[instrument(skip(self, client))]
    async fn execute(&self, params: Value, client: &Arc<DocsClient>) -> Result<Value> {
        let response = self.identify(params, client).await;
        Ok(serde_json::to_value(response)?)
    }

    fn description(&self) -> &str {
        "Return the complete, unprocessed OpenBB Workspace documentation table of contents with selection guidelines. Pick the relevant section titles yourself, then pass them to 'fetch_openbb_content'."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "user_query": {
                    "type": "string",
                    "description": "The user's question about OpenBB Workspace"
                }
            },
            "required": ["user_query"],
            "additionalProperties": false
        })
    }
}

impl Default for IdentifySectionsTool {
    fn default() -> Self {
        Self::new()
    }
}
