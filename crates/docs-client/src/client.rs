use crate::{
    config::DocsClientConfig,
    error_handling::{handle_http_response, map_request_error},
};
use openbb_docs_core::{error::NetworkError, Result};
use reqwest::Client;
use std::{sync::Arc, time::Duration};
use tracing::{debug, trace};

/// HTTP client for the two OpenBB documentation files
#[derive(Debug, Clone)]
pub struct DocsClient {
    client: Client,
    config: Arc<DocsClientConfig>,
}

impl DocsClient {
    /// Create a client for the public OpenBB documentation
    pub fn new() -> Result<Self> {
        Self::with_config(DocsClientConfig::default())
    }

    pub fn with_config(config: DocsClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(config.http.user_agent.clone())
            .build()
            .map_err(NetworkError::Reqwest)?;

        debug!(
            toc_url = %config.urls.toc_url,
            full_docs_url = %config.urls.full_docs_url,
            "Created docs client"
        );

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &DocsClientConfig {
        &self.config
    }

    /// GET `url` and return the body text of a 2xx response
    pub async fn get_text(&self, url: &str, timeout: Duration, context: &str) -> Result<String> {
        trace!(url = %url, timeout_secs = timeout.as_secs(), "Fetching document");

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| map_request_error(e, timeout, context))?;

        let response = handle_http_response(response, context).await?;
        let body = response
            .text()
            .await
            .map_err(|e| map_request_error(e, timeout, context))?;

        debug!(url = %url, bytes = body.len(), "Fetched document");
        Ok(body)
    }

    /// Fetch the raw table of contents
    pub async fn fetch_toc(&self) -> Result<String> {
        self.get_text(
            &self.config.urls.toc_url,
            self.config.http.toc_timeout(),
            "table of contents",
        )
        .await
    }

    /// Fetch the full documentation text
    pub async fn fetch_full_docs(&self) -> Result<String> {
        self.get_text(
            &self.config.urls.full_docs_url,
            self.config.http.content_timeout(),
            "full documentation",
        )
        .await
    }
}
