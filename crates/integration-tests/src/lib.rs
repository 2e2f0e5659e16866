//! Integration tests library for the OpenBB Docs MCP server
//!
//! Shared fixtures and a mocked documentation host used by the tests in `tests/`.

pub mod common;

// Re-export commonly used types for tests
pub use openbb_docs_client::{DocsClient, DocsClientConfig};
pub use openbb_docs_core::SectionDescriptor;
pub use openbb_docs_mcp_server::{Config, OpenBbDocsHandler, ToolHandler};
pub use serde_json::{json, Value};
pub use std::sync::Arc;
