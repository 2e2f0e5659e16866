use anyhow::{Context, Result};
use openbb_docs_client::DocsClientConfig;
use openbb_docs_core::ErrorBuilder;
use serde::{Deserialize, Serialize};
use std::{env, path::Path, str::FromStr};

/// Environment variable naming an optional TOML configuration file
pub const CONFIG_FILE_ENV: &str = "OPENBB_DOCS_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerSettings,
    pub client: DocsClientConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub name: String,
    pub version: String,
    pub instructions: String,
    pub bind_address: String,
    pub port: u16,
    pub ping_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            name: "OpenBB Docs Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: "This server provides access to OpenBB Workspace documentation. \
                Use 'discover_openbb_sections' to find available documentation sections, \
                then use 'fetch_openbb_content' to retrieve specific section content."
                .to_string(),
            bind_address: "0.0.0.0".to_string(),
            port: 8000,
            ping_interval_secs: 5,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then the file named by `OPENBB_DOCS_CONFIG`, then environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match env::var(CONFIG_FILE_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Config::default(),
        };

        config.load_from_env()?;

        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| ErrorBuilder::config().parse_error(e.to_string()).into())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ErrorBuilder::config()
                .file_not_found(path.display().to_string())
                .into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }

    fn load_from_env(&mut self) -> Result<()> {
        // Server settings; PORT is what hosting platforms set
        if let Ok(name) = env::var("OPENBB_DOCS_SERVER_NAME") {
            self.server.name = name;
        }
        if let Ok(bind_address) = env::var("OPENBB_DOCS_BIND_ADDRESS") {
            self.server.bind_address = bind_address;
        }
        if let Some(port) = parse_env("PORT")? {
            self.server.port = port;
        }
        if let Some(port) = parse_env("OPENBB_DOCS_PORT")? {
            self.server.port = port;
        }

        // Client settings
        if let Ok(toc_url) = env::var("OPENBB_DOCS_TOC_URL") {
            self.client.urls.toc_url = toc_url;
        }
        if let Ok(full_docs_url) = env::var("OPENBB_DOCS_FULL_DOCS_URL") {
            self.client.urls.full_docs_url = full_docs_url;
        }
        if let Ok(user_agent) = env::var("OPENBB_DOCS_USER_AGENT") {
            self.client.http.user_agent = user_agent;
        }
        if let Some(timeout) = parse_env("OPENBB_DOCS_TOC_TIMEOUT")? {
            self.client.http.toc_timeout_secs = timeout;
        }
        if let Some(timeout) = parse_env("OPENBB_DOCS_CONTENT_TIMEOUT")? {
            self.client.http.content_timeout_secs = timeout;
        }
        if let Some(max_sections) = parse_env("OPENBB_DOCS_MAX_SECTIONS")? {
            self.client.extraction.max_sections = max_sections;
        }
        if let Some(max_lines) = parse_env::<usize>("OPENBB_DOCS_MAX_SECTION_LINES")? {
            // 0 disables the per-section line limit
            self.client.extraction.max_section_lines = (max_lines > 0).then_some(max_lines);
        }

        // Logging settings
        if let Ok(level) = env::var("OPENBB_DOCS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("OPENBB_DOCS_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(ErrorBuilder::config()
                .invalid_field("server.name", "cannot be empty")
                .into());
        }
        if self.server.port == 0 {
            return Err(ErrorBuilder::config()
                .out_of_range("server.port", "0", "1..=65535")
                .into());
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(ErrorBuilder::config().missing_field("server.bind_address").into());
        }

        self.client
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid client configuration: {e}"))?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ErrorBuilder::config()
                    .invalid_field("logging.level", other)
                    .into())
            }
        }
        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => {}
            other => {
                return Err(ErrorBuilder::config()
                    .invalid_field("logging.format", other)
                    .into())
            }
        }

        Ok(())
    }
}

fn parse_env<T: FromStr>(var_name: &str) -> Result<Option<T>> {
    match env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ErrorBuilder::config().invalid_env_var(var_name, value).into()),
        Err(_) => Ok(None),
    }
}
