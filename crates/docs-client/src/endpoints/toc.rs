use crate::{client::DocsClient, filter::filter_sections, text_parser::parse_toc};
use openbb_docs_core::{DiscoverSectionsRequest, ErrorBuilder, Result, SectionDescriptor};
use tracing::{debug, trace};

/// Table of contents access: raw text, parsed sections and filtered sections
#[derive(Debug, Clone)]
pub struct TocService {
    client: DocsClient,
}

impl TocService {
    pub fn new(client: DocsClient) -> Self {
        Self { client }
    }

    /// Unprocessed TOC text, for callers that select sections themselves
    pub async fn raw_toc(&self) -> Result<String> {
        self.client.fetch_toc().await
    }

    /// Fetch and parse the whole table of contents
    pub async fn list_sections(&self) -> Result<Vec<SectionDescriptor>> {
        let toc = self.client.fetch_toc().await?;
        let sections = parse_toc(&toc);

        // A 200 answer with an HTML page instead of the outline is a broken upstream
        if sections.is_empty() && toc.trim_start().starts_with('<') {
            return Err(ErrorBuilder::docs()
                .parse_error("table of contents is an HTML page, expected an llms.txt outline"));
        }

        trace!(sections = sections.len(), "Table of contents parsed");
        Ok(sections)
    }

    /// Sections matching the request's query, in TOC order
    pub async fn discover(&self, request: &DiscoverSectionsRequest) -> Result<Vec<SectionDescriptor>> {
        let sections = self.list_sections().await?;
        let total = sections.len();
        let filtered = filter_sections(sections, request.normalized_query());

        debug!(
            query = ?request.normalized_query(),
            total_sections = total,
            matched_sections = filtered.len(),
            "Discovered documentation sections"
        );

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocsClientConfig;
    use mockito::Server;
    use openbb_docs_core::{error::DocsError, Error};

    const TOC: &str = r#"# OpenBB Workspace

## AI Features
- [Copilot Basics](https://docs.openbb.co/workspace/ai/copilot-basics): Chat with your data
- [MCP Tools](https://docs.openbb.co/workspace/ai/mcp-tools): Connect external tools

## Widgets
- [Widget Library](https://docs.openbb.co/workspace/widgets/library): Browse widgets
"#;

    fn service_for(server: &Server) -> TocService {
        let client = DocsClient::with_config(DocsClientConfig::new().with_base_url(&server.url()))
            .expect("Failed to create test client");
        TocService::new(client)
    }

    #[tokio::test]
    async fn test_list_sections() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/llms.txt")
            .with_status(200)
            .with_body(TOC)
            .create_async()
            .await;

        let sections = service_for(&server).list_sections().await.unwrap();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[2].category, "Widgets");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_discover_filters_by_query() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/llms.txt")
            .with_status(200)
            .with_body(TOC)
            .create_async()
            .await;

        let service = service_for(&server);
        let request = DiscoverSectionsRequest::new(Some("copilot".to_string()));
        let sections = service.discover(&request).await.unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Copilot Basics");
        assert_eq!(sections[0].category, "AI Features");
    }

    #[tokio::test]
    async fn test_raw_toc_is_unprocessed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/llms.txt")
            .with_status(200)
            .with_body(TOC)
            .create_async()
            .await;

        let raw = service_for(&server).raw_toc().await.unwrap();
        assert_eq!(raw, TOC);
    }

    #[tokio::test]
    async fn test_html_page_is_parse_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/llms.txt")
            .with_status(200)
            .with_body("<!DOCTYPE html><html><body>Maintenance</body></html>")
            .create_async()
            .await;

        let err = service_for(&server).list_sections().await.unwrap_err();
        assert!(matches!(err, Error::Docs(DocsError::ParseError { .. })));
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/llms.txt")
            .with_status(500)
            .create_async()
            .await;

        let err = service_for(&server)
            .discover(&DiscoverSectionsRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
