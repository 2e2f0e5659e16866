use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingSettings;

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
/// Output goes to stderr so stdout stays free for tool results.
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&settings.level)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match settings.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        "compact" => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

fn default_directives(level: &str) -> String {
    format!("{level},hyper=warn,reqwest=warn,rustls=warn")
}
