use thiserror::Error;

/// Documentation-related errors
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Failed to parse documentation: {reason}")]
    ParseError { reason: String },

    #[error("Section not found: {title}")]
    SectionNotFound { title: String },
}

impl DocsError {
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Self::ParseError {
            reason: reason.into(),
        }
    }

    pub fn section_not_found(title: impl Into<String>) -> Self {
        Self::SectionNotFound {
            title: title.into(),
        }
    }
}
