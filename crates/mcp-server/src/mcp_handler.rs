use anyhow::Result;
use async_trait::async_trait;
use rust_mcp_sdk::mcp_server::ServerHandler;
use rust_mcp_sdk::{
    schema::{
        schema_utils::CallToolError, CallToolRequest, CallToolResult, ListToolsRequest,
        ListToolsResult, RpcError, Tool,
    },
    McpServer,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, info};

use openbb_docs_client::DocsClient;
use openbb_docs_core::ErrorBuilder;

use crate::config::Config;
use crate::tools::{
    discover, fetch_content, identify, DiscoverSectionsTool, FetchContentTool,
    IdentifySectionsTool, ToolHandler,
};

pub struct ToolInfo {
    pub name: String,
    pub description: String,
}

/// Routes MCP tool calls to the registered documentation tools
pub struct OpenBbDocsHandler {
    tools: BTreeMap<String, Box<dyn ToolHandler>>,
    client: Arc<DocsClient>,
    config: Config,
}

impl OpenBbDocsHandler {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = Arc::new(DocsClient::with_config(config.client.clone())?);

        let mut handler = Self {
            tools: BTreeMap::new(),
            client,
            config,
        };
        handler.register_default_tools()?;

        info!(
            name = %handler.config.server.name,
            version = %handler.config.server.version,
            toc_url = %handler.config.client.urls.toc_url,
            full_docs_url = %handler.config.client.urls.full_docs_url,
            "Initialized OpenBB Docs MCP handler"
        );

        Ok(handler)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn register_default_tools(&mut self) -> Result<()> {
        self.register_tool(discover::TOOL_NAME, Box::new(DiscoverSectionsTool::new()))?;
        let max_sections = self.config.client.extraction.max_sections;
        self.register_tool(
            fetch_content::TOOL_NAME,
            Box::new(FetchContentTool::with_default_max_sections(max_sections)),
        )?;
        self.register_tool(identify::TOOL_NAME, Box::new(IdentifySectionsTool::new()))?;

        debug!(tools = ?self.tools.keys().collect::<Vec<_>>(), "Registered default tools");
        Ok(())
    }

    pub fn register_tool(&mut self, name: &str, handler: Box<dyn ToolHandler>) -> Result<()> {
        if self.tools.contains_key(name) {
            return Err(ErrorBuilder::protocol().duplicate_tool(name).into());
        }

        debug!(tool = %name, "Registering tool");
        self.tools.insert(name.to_string(), handler);
        Ok(())
    }

    pub fn get_available_tools(&self) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .map(|(name, tool)| ToolInfo {
                name: name.clone(),
                description: tool.description().to_string(),
            })
            .collect()
    }

    pub fn get_tool_schema(&self, tool_name: &str) -> Result<Value> {
        Ok(self.tool(tool_name)?.parameters_schema())
    }

    pub async fn execute_tool_directly(&self, tool_name: &str, params: Value) -> Result<Value> {
        self.execute_tool(tool_name, params).await
    }

    fn tool(&self, tool_name: &str) -> Result<&dyn ToolHandler> {
        self.tools
            .get(tool_name)
            .map(|tool| tool.as_ref())
            .ok_or_else(|| ErrorBuilder::protocol().tool_not_found(tool_name).into())
    }

    fn create_tools(&self) -> Result<Vec<Tool>> {
        self.tools
            .iter()
            .map(|(name, tool)| -> Result<Tool> {
                Ok(Tool {
                    name: name.clone(),
                    description: Some(tool.description().to_string()),
                    input_schema: serde_json::from_value(tool.parameters_schema())?,
                    annotations: None,
                })
            })
            .collect()
    }

    async fn execute_tool(&self, tool_name: &str, params: Value) -> Result<Value> {
        self.tool(tool_name)?.execute(params, &self.client).await
    }
}

#[async_trait]
impl ServerHandler for OpenBbDocsHandler {
    async fn handle_list_tools_request(
        &self,
        _request: ListToolsRequest,
        _runtime: &dyn McpServer,
    ) -> Result<ListToolsResult, RpcError> {
        let tools = self.create_tools().map_err(|e| {
            error!(error = %e, "Failed to build tool list");
            RpcError::internal_error().with_message(e.to_string())
        })?;
        debug!(count = tools.len(), "Listed available tools");

        Ok(ListToolsResult {
            tools,
            meta: None,
            next_cursor: None,
        })
    }

    async fn handle_call_tool_request(
        &self,
        request: CallToolRequest,
        _runtime: &dyn McpServer,
    ) -> Result<CallToolResult, CallToolError> {
        let tool_name = request.params.name;
        let params = match request.params.arguments {
            Some(args) => Value::Object(args),
            None => Value::Object(serde_json::Map::new()),
        };

        debug!(tool = %tool_name, params = %params, "Executing tool");

        let result = self.execute_tool(&tool_name, params).await.map_err(|e| {
            error!(tool = %tool_name, error = %e, "Tool execution failed");
            CallToolError::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Tool execution error: {e}"),
            ))
        })?;

        let text = serde_json::to_string_pretty(&result).map_err(|e| {
            error!(tool = %tool_name, error = %e, "Failed to serialize tool result");
            CallToolError::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Serialization error: {e}"),
            ))
        })?;

        Ok(CallToolResult::text_content(text, None))
    }
}
