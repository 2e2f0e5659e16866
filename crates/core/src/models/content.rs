use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request for extracting the content of specific documentation sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchContentRequest {
    pub section_titles: Vec<String>,
    pub max_sections: Option<usize>,
    pub user_query: Option<String>,
}

impl FetchContentRequest {
    pub fn new(section_titles: Vec<String>) -> Self {
        Self {
            section_titles,
            max_sections: None,
            user_query: None,
        }
    }

    pub fn with_max_sections(mut self, max_sections: usize) -> Self {
        self.max_sections = Some(max_sections);
        self
    }

    /// Section cap for this request, falling back to the configured default
    pub fn effective_max_sections(&self, default: usize) -> usize {
        self.max_sections.unwrap_or(default)
    }
}

/// Sections extracted from the full documentation for one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Requested title mapped to its extracted text
    pub content: BTreeMap<String, String>,
    /// Processed titles that had no matching heading
    pub missing_sections: Vec<String>,
    /// Number of titles the caller supplied, before capping
    pub sections_requested: usize,
    /// Whether titles beyond the cap were dropped
    pub truncated: bool,
}

impl ExtractionResult {
    pub fn sections_found(&self) -> usize {
        self.content.len()
    }
}

/// Result of `fetch_openbb_content`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchContentResponse {
    pub success: bool,
    pub content: BTreeMap<String, String>,
    pub sections_found: usize,
    pub sections_requested: usize,
    pub truncated: bool,
    #[serde(default)]
    pub missing_sections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FetchContentResponse {
    pub fn from_extraction(result: ExtractionResult) -> Self {
        Self {
            success: true,
            sections_found: result.sections_found(),
            sections_requested: result.sections_requested,
            truncated: result.truncated,
            content: result.content,
            missing_sections: result.missing_sections,
            user_query: None,
            instruction: None,
            error: None,
        }
    }

    /// Attach the caller's question and the answer-writing guidelines
    pub fn with_user_query(mut self, user_query: String, instruction: String) -> Self {
        self.user_query = Some(user_query);
        self.instruction = Some(instruction);
        self
    }

    pub fn failed(error: impl Into<String>, sections_requested: usize) -> Self {
        Self {
            success: false,
            content: BTreeMap::new(),
            sections_found: 0,
            sections_requested,
            truncated: false,
            missing_sections: Vec::new(),
            user_query: None,
            instruction: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_max_sections() {
        let request = FetchContentRequest::new(vec!["Copilot Basics".to_string()]);
        assert_eq!(request.effective_max_sections(3), 3);
        assert_eq!(request.with_max_sections(5).effective_max_sections(3), 5);
    }

    #[test]
    fn test_response_from_partial_extraction() {
        let mut content = BTreeMap::new();
        content.insert("Copilot Basics".to_string(), "# Copilot Basics\ntext".to_string());
        content.insert("Widgets".to_string(), "# Widgets\ntext".to_string());

        let result = ExtractionResult {
            content,
            missing_sections: vec!["Nonexistent".to_string()],
            sections_requested: 3,
            truncated: false,
        };
        let response = FetchContentResponse::from_extraction(result);

        assert!(response.success);
        assert_eq!(response.sections_found, 2);
        assert_eq!(response.sections_requested, 3);
        assert_eq!(response.missing_sections, vec!["Nonexistent".to_string()]);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("user_query").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_response_with_user_query() {
        let response = FetchContentResponse::from_extraction(ExtractionResult::default())
            .with_user_query("How do I add a widget?".to_string(), "guidelines".to_string());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["user_query"], "How do I add a widget?");
        assert_eq!(json["instruction"], "guidelines");
        assert_eq!(json["sections_found"], 0);
        assert_eq!(json["truncated"], false);
    }

    #[test]
    fn test_failed_response() {
        let response = FetchContentResponse::failed("HTTP 503", 2);
        assert!(!response.success);
        assert!(response.content.is_empty());
        assert_eq!(response.sections_requested, 2);
        assert_eq!(response.error.as_deref(), Some("HTTP 503"));
    }
}
