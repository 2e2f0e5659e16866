use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use openbb_docs_client::{ContentService, DocsClient};
use openbb_docs_core::{
    constants::{DEFAULT_MAX_SECTIONS, MAX_SECTIONS_LIMIT},
    Error, FetchContentRequest, FetchContentResponse,
};

use super::{instructions::answer_guidelines, parse_input, ParameterValidator, ToolHandler, ToolInput};

pub const TOOL_NAME: &str = "fetch_openbb_content";

/// Input parameters for the fetch_openbb_content tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchContentToolInput {
    /// Exact section titles, as listed by the discovery tools
    pub section_titles: Vec<String>,
    /// Cap on processed titles (default from configuration, normally 3)
    #[serde(default)]
    pub max_sections: Option<usize>,
    /// The user's original question, echoed back with answer guidelines
    #[serde(default)]
    pub user_query: Option<String>,
}

impl ToolInput for FetchContentToolInput {
    fn validate(&self) -> Result<(), Error> {
        ParameterValidator::validate_max_sections(self.max_sections, TOOL_NAME)
    }
}

impl FetchContentToolInput {
    pub fn to_request(&self) -> FetchContentRequest {
        FetchContentRequest {
            section_titles: self.section_titles.clone(),
            max_sections: self.max_sections,
            user_query: self.user_query.clone(),
        }
    }
}

/// Extracts full content for specific documentation sections
pub struct FetchContentTool {
    /// Cap applied when the caller omits `max_sections`; advertised in the schema
    default_max_sections: usize,
}

impl FetchContentTool {
    pub fn new() -> Self {
        Self::with_default_max_sections(DEFAULT_MAX_SECTIONS)
    }

    pub fn with_default_max_sections(default_max_sections: usize) -> Self {
        Self {
            default_max_sections,
        }
    }

    async fn fetch(&self, params: Value, client: &Arc<DocsClient>) -> FetchContentResponse {
        // Best-effort count so failures still report what was asked for
        let requested = params
            .get("section_titles")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        let input: FetchContentToolInput = match parse_input(params, TOOL_NAME) {
            Ok(input) => input,
            Err(e) => return FetchContentResponse::failed(e.to_string(), requested),
        };
        let request = input.to_request();

        let service = ContentService::new((**client).clone());
        let result = match service.fetch_sections(&request).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    error = %e,
                    category = %e.category(),
                    recoverable = e.is_recoverable(),
                    "Failed to fetch documentation content"
                );
                return FetchContentResponse::failed(
                    format!("Failed to fetch documentation: {e}"),
                    request.section_titles.len(),
                );
            }
        };

        debug!(
            sections_found = result.sections_found(),
            sections_requested = result.sections_requested,
            truncated = result.truncated,
            "Content fetch completed"
        );

        let response = FetchContentResponse::from_extraction(result);
        match request
            .user_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
        {
            Some(query) => response.with_user_query(query.to_string(), answer_guidelines(query)),
            None => response,
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for FetchContentTool {
    #[instrument(skip(self, client))]
    async fn execute(&self, params: Value, client: &Arc<DocsClient>) -> Result<Value> {
        let response = self.fetch(params, client).await;
        Ok(serde_json::to_value(response)?)
    }

    fn description(&self) -> &str {
        "Fetch the full text of specific OpenBB Workspace documentation sections by their exact titles (from 'discover_openbb_sections' or 'identify_openbb_docs_sections'). Titles without a matching section are reported in 'missing_sections'."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "section_titles": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Exact section titles to fetch, most relevant first"
                },
                "max_sections": {
                    "type": "integer",
                    "description": format!(
                        "Maximum number of titles to process (default: {})",
                        self.default_max_sections
                    ),
                    "minimum": 1,
                    "maximum": MAX_SECTIONS_LIMIT,
                    "default": self.default_max_sections
                },
                "user_query": {
                    "type": "string",
                    "description": "The user's original question; when given, answer guidelines are returned with the content"
                }
            },
            "required": ["section_titles"],
            "additionalProperties": false
        })
    }
}

impl Default for FetchContentTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Mock, Server, ServerGuard};
    use openbb_docs_client::DocsClientConfig;

    const FULL_DOCS: &str = r#"# Copilot Basics
Ask the copilot about your widgets.

# Generative UI
The copilot can build charts.

# Data Handling
Upload CSV files.

# Dashboards Overview
Arrange widgets on a dashboard.
"#;

    fn client_for(server: &Server) -> Arc<DocsClient> {
        Arc::new(
            DocsClient::with_config(DocsClientConfig::new().with_base_url(&server.url())).unwrap(),
        )
    }

    async fn docs_server() -> (ServerGuard, Mock) {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/llms-full.txt")
            .with_status(200)
            .with_body(FULL_DOCS)
            .create_async()
            .await;
        (server, mock)
    }

    #[test]
    fn test_input_validation() {
        let input: FetchContentToolInput =
            serde_json::from_value(json!({"section_titles": ["Copilot Basics"]})).unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(input.max_sections, None);

        let input: FetchContentToolInput =
            serde_json::from_value(json!({"section_titles": [], "max_sections": 0})).unwrap();
        assert!(input.validate().is_err());

        let missing: Result<FetchContentToolInput, _> =
            serde_json::from_value(json!({"max_sections": 2}));
        assert!(missing.is_err());

        let misspelled: Result<FetchContentToolInput, _> =
            serde_json::from_value(json!({"section_titles": ["A"], "max_section": 5}));
        assert!(misspelled.is_err());
    }

    #[test]
    fn test_parameters_schema() {
        let schema = FetchContentTool::new().parameters_schema();

        assert_eq!(schema["required"][0], "section_titles");
        assert_eq!(schema["properties"]["section_titles"]["type"], "array");
        assert_eq!(schema["properties"]["max_sections"]["default"], 3);
        assert_eq!(schema["properties"]["max_sections"]["maximum"], MAX_SECTIONS_LIMIT);

        let schema = FetchContentTool::with_default_max_sections(5).parameters_schema();
        assert_eq!(schema["properties"]["max_sections"]["default"], 5);
        assert!(schema["properties"]["max_sections"]["description"]
            .as_str()
            .unwrap()
            .contains("(default: 5)"));
    }

    #[tokio::test]
    async fn test_misspelled_parameter_is_rejected() {
        let (server, _mock) = docs_server().await;

        let result = FetchContentTool::new()
            .execute(
                json!({"section_titles": ["Copilot Basics"], "max_section": 5}),
                &client_for(&server),
            )
            .await
            .unwrap();

        assert_eq!(result["success"], false);
        assert_eq!(result["sections_requested"], 1);
        assert!(result["error"].as_str().unwrap().contains("max_section"));
    }

    #[tokio::test]
    async fn test_partial_results() {
        let (server, _mock) = docs_server().await;

        let result = FetchContentTool::new()
            .execute(
                json!({"section_titles": ["Copilot Basics", "Backtesting", "Data Handling"]}),
                &client_for(&server),
            )
            .await
            .unwrap();

        assert_eq!(result["success"], true);
        assert_eq!(result["sections_found"], 2);
        assert_eq!(result["sections_requested"], 3);
        assert_eq!(result["truncated"], false);
        assert!(result["content"].get("Backtesting").is_none());
        assert_eq!(result["missing_sections"][0], "Backtesting");
        assert!(result["content"]["Data Handling"]
            .as_str()
            .unwrap()
            .contains("Upload CSV files."));
    }

    #[tokio::test]
    async fn test_cap_truncates_request() {
        let (server, _mock) = docs_server().await;

        let result = FetchContentTool::new()
            .execute(
                json!({"section_titles": [
                    "Copilot Basics",
                    "Generative UI",
                    "Data Handling",
                    "Dashboards Overview",
                    "Backtesting"
                ]}),
                &client_for(&server),
            )
            .await
            .unwrap();

        assert_eq!(result["content"].as_object().unwrap().len(), 3);
        assert_eq!(result["truncated"], true);
        assert_eq!(result["sections_requested"], 5);
    }

    #[tokio::test]
    async fn test_zero_titles() {
        let (server, _mock) = docs_server().await;

        let result = FetchContentTool::new()
            .execute(json!({"section_titles": []}), &client_for(&server))
            .await
            .unwrap();

        assert_eq!(result["success"], true);
        assert!(result["content"].as_object().unwrap().is_empty());
        assert_eq!(result["sections_found"], 0);
        assert_eq!(result["truncated"], false);
    }

    #[tokio::test]
    async fn test_user_query_adds_guidelines() {
        let (server, _mock) = docs_server().await;

        let result = FetchContentTool::new()
            .execute(
                json!({
                    "section_titles": ["Generative UI"],
                    "user_query": "Can copilot make charts?"
                }),
                &client_for(&server),
            )
            .await
            .unwrap();

        assert_eq!(result["user_query"], "Can copilot make charts?");
        assert!(result["instruction"]
            .as_str()
            .unwrap()
            .contains("User's question: Can copilot make charts?"));
    }

    #[tokio::test]
    async fn test_invalid_max_sections_is_structured() {
        let server = Server::new_async().await;

        let result = FetchContentTool::new()
            .execute(
                json!({"section_titles": ["A", "B"], "max_sections": 50}),
                &client_for(&server),
            )
            .await
            .unwrap();

        assert_eq!(result["success"], false);
        assert_eq!(result["sections_requested"], 2);
        assert!(result["error"].as_str().unwrap().contains("max_sections"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_structured() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/llms-full.txt")
            .with_status(502)
            .create_async()
            .await;

        let result = FetchContentTool::new()
            .execute(json!({"section_titles": ["Copilot Basics"]}), &client_for(&server))
            .await
            .unwrap();

        assert_eq!(result["success"], false);
        assert_eq!(result["sections_found"], 0);
        assert_eq!(result["sections_requested"], 1);
        assert!(result["error"].as_str().unwrap().contains("HTTP 502"));
    }
}
