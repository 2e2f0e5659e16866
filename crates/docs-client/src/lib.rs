pub mod client;
pub mod config;
pub mod endpoints;
mod error_handling;
pub mod filter;
pub mod text_parser;

pub use client::DocsClient;
pub use config::{DocsClientConfig, ExtractionConfig, HttpConfig, UrlConfig};
pub use endpoints::{ContentService, TocService};
pub use filter::filter_sections;
pub use text_parser::{extract_sections, parse_toc, SectionIndex};
