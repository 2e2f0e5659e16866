use serde::{Deserialize, Serialize};

/// One entry of the documentation table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub title: String,
    pub category: String,
    pub url: String,
    pub description: String,
}

impl SectionDescriptor {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Request for listing documentation sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoverSectionsRequest {
    pub query: Option<String>,
}

impl DiscoverSectionsRequest {
    pub fn new(query: Option<String>) -> Self {
        Self { query }
    }

    /// The trimmed query, or `None` when absent or blank
    pub fn normalized_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

/// Result of `discover_openbb_sections`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverSectionsResponse {
    pub success: bool,
    pub sections: Vec<SectionDescriptor>,
    pub total_sections: usize,
    pub query_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiscoverSectionsResponse {
    pub fn found(sections: Vec<SectionDescriptor>, query_used: Option<String>) -> Self {
        Self {
            success: true,
            total_sections: sections.len(),
            sections,
            query_used,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, query_used: Option<String>) -> Self {
        Self {
            success: false,
            sections: Vec::new(),
            total_sections: 0,
            query_used,
            error: Some(error.into()),
        }
    }
}

/// Result of `identify_openbb_docs_sections`: the raw TOC for caller-side selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifySectionsResponse {
    pub success: bool,
    pub query: String,
    pub raw_toc_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IdentifySectionsResponse {
    pub fn found(query: impl Into<String>, raw_toc_content: String, instruction: String) -> Self {
        Self {
            success: true,
            query: query.into(),
            raw_toc_content,
            instruction: Some(instruction),
            error: None,
        }
    }

    pub fn failed(query: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            query: query.into(),
            raw_toc_content: String::new(),
            instruction: None,
            error: Some(error.into()),
        }
    }
}
