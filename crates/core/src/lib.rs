pub mod constants;
pub mod error;
pub mod models;

pub use error::{Error, ErrorBuilder, ErrorCategory, ErrorContext, Result};

// Re-export commonly used models for convenience
pub use models::{
    content::{ExtractionResult, FetchContentRequest, FetchContentResponse},
    sections::{
        DiscoverSectionsRequest, DiscoverSectionsResponse, IdentifySectionsResponse,
        SectionDescriptor,
    },
};

pub use constants::{
    DEFAULT_CONTENT_TIMEOUT_SECS, DEFAULT_FULL_DOCS_URL, DEFAULT_MAX_SECTIONS,
    DEFAULT_MAX_SECTION_LINES, DEFAULT_TOC_TIMEOUT_SECS, DEFAULT_TOC_URL, MAX_SECTIONS_LIMIT,
};
