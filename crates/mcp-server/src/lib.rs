pub mod config;
pub mod logging;
pub mod mcp_handler;
pub mod tools;

pub use config::Config;
pub use logging::init_logging;
pub use mcp_handler::{OpenBbDocsHandler, ToolInfo};
pub use tools::ToolHandler;
