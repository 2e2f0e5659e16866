use openbb_docs_core::{
    constants::{
        DEFAULT_CONTENT_TIMEOUT_SECS, DEFAULT_FULL_DOCS_URL, DEFAULT_MAX_SECTIONS,
        DEFAULT_MAX_SECTION_LINES, DEFAULT_TOC_TIMEOUT_SECS, DEFAULT_TOC_URL, MAX_SECTIONS_LIMIT,
    },
    ErrorBuilder, ErrorContext, Result,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Upstream documentation locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Table of contents in llms.txt outline format
    pub toc_url: String,
    /// Full documentation with one heading per page
    pub full_docs_url: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            toc_url: DEFAULT_TOC_URL.to_string(),
            full_docs_url: DEFAULT_FULL_DOCS_URL.to_string(),
        }
    }
}

/// HTTP behaviour of the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub toc_timeout_secs: u64,
    pub content_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("openbb-docs-mcp/", env!("CARGO_PKG_VERSION")).to_string(),
            toc_timeout_secs: DEFAULT_TOC_TIMEOUT_SECS,
            content_timeout_secs: DEFAULT_CONTENT_TIMEOUT_SECS,
        }
    }
}

impl HttpConfig {
    pub fn toc_timeout(&self) -> Duration {
        Duration::from_secs(self.toc_timeout_secs)
    }

    pub fn content_timeout(&self) -> Duration {
        Duration::from_secs(self.content_timeout_secs)
    }
}

/// Limits applied when extracting sections from the full documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of requested titles processed per call
    pub max_sections: usize,
    /// Lines kept per section; `None` keeps whole sections
    pub max_section_lines: Option<usize>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_sections: DEFAULT_MAX_SECTIONS,
            max_section_lines: Some(DEFAULT_MAX_SECTION_LINES),
        }
    }
}

impl ExtractionConfig {
    pub fn with_max_sections(mut self, max_sections: usize) -> Self {
        self.max_sections = max_sections;
        self
    }
}

/// Complete configuration for the docs client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocsClientConfig {
    pub urls: UrlConfig,
    pub http: HttpConfig,
    pub extraction: ExtractionConfig,
}

impl DocsClientConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Point both documents at a different host, keeping the default file names
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        self.urls.toc_url = format!("{base}/llms.txt");
        self.urls.full_docs_url = format!("{base}/llms-full.txt");
        self
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.urls.toc_url).context("Invalid table of contents URL")?;
        Url::parse(&self.urls.full_docs_url).context("Invalid full documentation URL")?;

        if self.http.user_agent.trim().is_empty() {
            return Err(ErrorBuilder::config().invalid_field("http.user_agent", "cannot be empty"));
        }
        if self.http.toc_timeout_secs == 0 {
            return Err(ErrorBuilder::config().out_of_range(
                "http.toc_timeout_secs",
                "0",
                "greater than 0",
            ));
        }
        if self.http.content_timeout_secs == 0 {
            return Err(ErrorBuilder::config().out_of_range(
                "http.content_timeout_secs",
                "0",
                "greater than 0",
            ));
        }
        if self.extraction.max_sections == 0 || self.extraction.max_sections > MAX_SECTIONS_LIMIT {
            return Err(ErrorBuilder::config().out_of_range(
                "extraction.max_sections",
                self.extraction.max_sections.to_string(),
                format!("1..={MAX_SECTIONS_LIMIT}"),
            ));
        }
        if self.extraction.max_section_lines == Some(0) {
            return Err(ErrorBuilder::config().out_of_range(
                "extraction.max_section_lines",
                "0",
                "greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = DocsClientConfig::new();

        assert_eq!(
            config.urls.toc_url,
            "https://docs.openbb.co/workspace/llms.txt"
        );
        assert_eq!(
            config.urls.full_docs_url,
            "https://docs.openbb.co/workspace/llms-full.txt"
        );
        assert_eq!(config.http.toc_timeout(), Duration::from_secs(30));
        assert_eq!(config.http.content_timeout(), Duration::from_secs(60));
        assert_eq!(config.extraction.max_sections, 3);
        assert_eq!(config.extraction.max_section_lines, Some(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_base_url() {
        let config = DocsClientConfig::new().with_base_url("http://127.0.0.1:1234/");
        assert_eq!(config.urls.toc_url, "http://127.0.0.1:1234/llms.txt");
        assert_eq!(config.urls.full_docs_url, "http://127.0.0.1:1234/llms-full.txt");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = DocsClientConfig::new();
        config.urls.toc_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = DocsClientConfig::new();
        config.http.content_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = DocsClientConfig::new();
        config.extraction.max_sections = 0;
        assert!(config.validate().is_err());

        let mut config = DocsClientConfig::new();
        config.extraction.max_sections = MAX_SECTIONS_LIMIT + 1;
        assert!(config.validate().is_err());

        let mut config = DocsClientConfig::new();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_config() {
        let toml_str = r#"
[urls]
toc_url = "https://mirror.example.com/llms.txt"

[extraction]
max_sections = 5
"#;

        let config = DocsClientConfig::from_toml(toml_str).expect("Failed to parse partial TOML");

        assert_eq!(config.urls.toc_url, "https://mirror.example.com/llms.txt");
        assert_eq!(config.extraction.max_sections, 5);

        // Defaults fill everything not overridden
        assert_eq!(config.urls.full_docs_url, DEFAULT_FULL_DOCS_URL);
        assert_eq!(config.extraction.max_section_lines, Some(100));
        assert_eq!(config.http.toc_timeout_secs, 30);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DocsClientConfig::new();
        let toml_str = config.to_toml().expect("Failed to serialize to TOML");

        assert!(toml_str.contains("[urls]"));
        assert!(toml_str.contains("[extraction]"));

        let parsed = DocsClientConfig::from_toml(&toml_str).expect("Failed to parse TOML");
        assert_eq!(parsed, config);
    }
}
