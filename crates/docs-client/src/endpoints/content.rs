use crate::{client::DocsClient, text_parser::extract_sections};
use openbb_docs_core::{ExtractionResult, FetchContentRequest, Result};
use tracing::debug;

/// Section extraction from the full documentation
#[derive(Debug, Clone)]
pub struct ContentService {
    client: DocsClient,
}

impl ContentService {
    pub fn new(client: DocsClient) -> Self {
        Self { client }
    }

    /// Fetch the full documentation and extract the requested sections.
    ///
    /// The request's `max_sections` overrides the configured cap.
    pub async fn fetch_sections(&self, request: &FetchContentRequest) -> Result<ExtractionResult> {
        let base = self.client.config().extraction;
        let config = base.with_max_sections(request.effective_max_sections(base.max_sections));

        let full_docs = self.client.fetch_full_docs().await?;
        debug!(
            bytes = full_docs.len(),
            requested = request.section_titles.len(),
            max_sections = config.max_sections,
            "Extracting sections from full documentation"
        );

        Ok(extract_sections(&full_docs, &request.section_titles, &config))
    }
}
