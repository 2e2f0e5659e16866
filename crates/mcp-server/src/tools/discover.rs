use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use openbb_docs_client::{DocsClient, TocService};
use openbb_docs_core::{DiscoverSectionsRequest, DiscoverSectionsResponse, Error};

use super::{parse_input, ToolHandler, ToolInput};

pub const TOOL_NAME: &str = "discover_openbb_sections";

/// Input parameters for the discover_openbb_sections tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoverToolInput {
    /// Optional filter over section title, category and description
    #[serde(default)]
    pub query: Option<String>,
}

impl ToolInput for DiscoverToolInput {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl DiscoverToolInput {
    pub fn to_request(&self) -> DiscoverSectionsRequest {
        DiscoverSectionsRequest::new(self.query.clone())
    }
}

/// Lists documentation sections from the table of contents
pub struct DiscoverSectionsTool;

impl DiscoverSectionsTool {
    pub fn new() -> Self {
        Self
    }

    async fn discover(&self, params: Value, client: &Arc<DocsClient>) -> DiscoverSectionsResponse {
        let input: DiscoverToolInput = match parse_input(params, TOOL_NAME) {
            Ok(input) => input,
            Err(e) => return DiscoverSectionsResponse::failed(e.to_string(), None),
        };

        let request = input.to_request();
        let query_used = request.normalized_query().map(str::to_string);

        let service = TocService::new((**client).clone());
        match service.discover(&request).await {
            Ok(sections) => {
                debug!(
                    query = ?query_used,
                    total_sections = sections.len(),
                    "Discover completed"
                );
                DiscoverSectionsResponse::found(sections, query_used)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    category = %e.category(),
                    recoverable = e.is_recoverable(),
                    "Failed to discover sections"
                );
                DiscoverSectionsResponse::failed(
                    format!("Failed to fetch table of contents: {e}"),
                    query_used,
                )
            }
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for DiscoverSectionsTool {
    #[instrument(skip(self, client))]
    async fn execute(&self, params: Value, client: &Arc<DocsClient>) -> Result<Value> {
        let response = self.discover(params, client).await;
        Ok(serde_json::to_value(response)?)
    }

    fn description(&self) -> &str {
        "Discover the available OpenBB Workspace documentation sections. Returns each section's title, category, URL and description, optionally filtered by a case-insensitive query. Use the returned titles with 'fetch_openbb_content'."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Optional text matched against section titles, categories and descriptions (case-insensitive). Omit to list every section."
                }
            },
            "additionalProperties": false
        })
    }
}

impl Default for DiscoverSectionsTool {
    fn default() -> Self {
        Self::new()
    }
}
