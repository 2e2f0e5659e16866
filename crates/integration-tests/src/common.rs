//! Common utilities for integration tests

use crate::*;
use mockito::{Mock, Server, ServerGuard};

pub const DISCOVER: &str = "discover_openbb_sections";
pub const FETCH_CONTENT: &str = "fetch_openbb_content";
pub const IDENTIFY: &str = "identify_openbb_docs_sections";

/// A small `llms.txt` outline in the layout docs.openbb.co serves
pub const SAMPLE_TOC: &str = r#"# OpenBB Workspace

> OpenBB Workspace is an AI-powered research platform for financial analysts.

## Getting Started
- [Workspace Overview](https://docs.openbb.co/workspace/overview): What the workspace is and who it is for
- [Installation](https://docs.openbb.co/workspace/installation)

## AI Features
- [Copilot Basics](https://docs.openbb.co/workspace/ai/copilot-basics): Ask questions about your widgets and data
- [Generative UI](https://docs.openbb.co/workspace/ai/generative-ui): Let the copilot create charts and tables
- [MCP Tools](https://docs.openbb.co/workspace/ai/mcp-tools): Connect external MCP servers to the copilot

## Dashboards
- [Dashboards Overview](https://docs.openbb.co/workspace/dashboards): Arrange widgets into dashboards
- [Sharing Dashboards](https://docs.openbb.co/workspace/dashboards/sharing): Share dashboards with your team
- Not a link, skipped
"#;

/// Full documentation matching `SAMPLE_TOC`
pub const SAMPLE_FULL_DOCS: &str = r#"# Workspace Overview
OpenBB Workspace brings data, AI and dashboards together.

# Installation
Sign in at pro.openbb.co, no installation required.

# Copilot Basics
The copilot answers questions using the widgets on your dashboard.

## Adding context
Select widgets to pin them as context.

```bash
# Not a heading inside a fence
echo "copilot"
```

# Generative UI
The copilot can build charts and tables on request.

# MCP Tools
Register an MCP server URL in the copilot settings.

# Dashboards Overview
Dashboards hold widgets arranged on a grid.

# Sharing Dashboards
Share a dashboard from the top bar.
"#;

/// An outline with `count` entries spread over five categories
pub fn toc_with_entries(count: usize) -> String {
    let mut toc = String::from("# OpenBB Workspace\n");
    for i in 0..count {
        if i % 15 == 0 {
            toc.push_str(&format!("\n## Category {}\n", i / 15 + 1));
        }
        toc.push_str(&format!(
            "- [Section {i}](https://docs.openbb.co/workspace/section-{i}): Description of section {i}\n"
        ));
    }
    toc
}

/// Mocked documentation host serving `/llms.txt` and `/llms-full.txt`
pub struct MockDocsHost {
    pub server: ServerGuard,
    mocks: Vec<Mock>,
}

impl MockDocsHost {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Host serving the sample outline and full documentation
    pub async fn with_samples() -> Self {
        let mut host = Self::new().await;
        host.serve_toc(SAMPLE_TOC).await;
        host.serve_full_docs(SAMPLE_FULL_DOCS).await;
        host
    }

    pub async fn serve_toc(&mut self, body: &str) {
        self.serve("/llms.txt", 200, body).await
    }

    pub async fn serve_full_docs(&mut self, body: &str) {
        self.serve("/llms-full.txt", 200, body).await
    }

    pub async fn fail_toc(&mut self, status: usize) {
        self.serve("/llms.txt", status, "upstream failure").await
    }

    pub async fn fail_full_docs(&mut self, status: usize) {
        self.serve("/llms-full.txt", status, "upstream failure").await
    }

    async fn serve(&mut self, path: &str, status: usize, body: &str) {
        let mock = self
            .server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", "text/plain; charset=utf-8")
            .with_body(body)
            .create_async()
            .await;
        self.mocks.push(mock);
    }

    pub fn client_config(&self) -> DocsClientConfig {
        DocsClientConfig::new().with_base_url(&self.server.url())
    }

    /// Server configuration pointing at this host
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.client = self.client_config();
        config
    }

    pub fn handler(&self) -> OpenBbDocsHandler {
        OpenBbDocsHandler::new(self.config()).expect("Failed to create handler")
    }
}

/// Run a tool through the handler, failing the test on transport-level errors
pub async fn call_tool(handler: &OpenBbDocsHandler, tool: &str, params: Value) -> Value {
    handler
        .execute_tool_directly(tool, params)
        .await
        .unwrap_or_else(|e| panic!("{tool} failed: {e}"))
}

/// Titles of the sections in a discover response
pub fn section_titles(response: &Value) -> Vec<String> {
    response["sections"]
        .as_array()
        .map(|sections| {
            sections
                .iter()
                .filter_map(|s| s["title"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
