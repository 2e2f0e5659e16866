use super::{normalize_title, parse_heading, FenceTracker};
use crate::config::ExtractionConfig;
use openbb_docs_core::{
    constants::SECTION_TRUNCATED_MARKER, error::DocsError, ExtractionResult,
};
use tracing::{debug, trace};

#[derive(Debug)]
struct IndexedHeading {
    line: usize,
    level: usize,
    normalized: String,
}

/// Heading index over a full documentation document.
///
/// A section runs from its heading line up to the next heading of the same
/// or a higher level. Titles are compared after whitespace normalization and
/// lowercasing; there is no fuzzy matching, so a heading worded differently
/// from the TOC title will not be found. When several headings share a title,
/// the shallowest one wins, and the earliest among those.
#[derive(Debug)]
pub struct SectionIndex<'a> {
    lines: Vec<&'a str>,
    headings: Vec<IndexedHeading>,
}

impl<'a> SectionIndex<'a> {
    pub fn build(document: &'a str) -> Self {
        let lines: Vec<&str> = document.lines().collect();
        let mut fences = FenceTracker::default();

        let headings = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !fences.is_fenced(line))
            .filter_map(|(index, line)| {
                parse_heading(line).map(|heading| IndexedHeading {
                    line: index,
                    level: heading.level,
                    normalized: normalize_title(heading.text),
                })
            })
            .collect::<Vec<_>>();

        trace!(
            lines = lines.len(),
            headings = headings.len(),
            "Indexed documentation headings"
        );

        Self { lines, headings }
    }

    /// Text of the section whose heading matches `title`.
    ///
    /// With `max_lines` set, longer sections are cut and end with a marker line.
    pub fn section(&self, title: &str, max_lines: Option<usize>) -> Result<String, DocsError> {
        let wanted = normalize_title(title);
        if wanted.is_empty() {
            return Err(DocsError::section_not_found(title));
        }

        let (position, heading) = self
            .headings
            .iter()
            .enumerate()
            .filter(|(_, heading)| heading.normalized == wanted)
            .min_by_key(|(_, heading)| heading.level)
            .ok_or_else(|| DocsError::section_not_found(title))?;

        let end = self.headings[position + 1..]
            .iter()
            .find(|next| next.level <= heading.level)
            .map(|next| next.line)
            .unwrap_or(self.lines.len());

        let mut body: Vec<&str> = self.lines[heading.line..end].to_vec();
        while body.len() > 1 && body.last().is_some_and(|line| line.trim().is_empty()) {
            body.pop();
        }

        if let Some(limit) = max_lines {
            if body.len() > limit {
                body.truncate(limit);
                body.push(SECTION_TRUNCATED_MARKER);
            }
        }

        Ok(body.join("\n"))
    }
}

/// Extract the requested sections from the full documentation.
///
/// Only the first `config.max_sections` titles are processed, in caller order;
/// `truncated` reports whether any were dropped. Titles without a matching
/// heading are listed in `missing_sections` instead of failing the call.
pub fn extract_sections(
    document: &str,
    titles: &[String],
    config: &ExtractionConfig,
) -> ExtractionResult {
    let index = SectionIndex::build(document);
    let mut result = ExtractionResult {
        sections_requested: titles.len(),
        truncated: titles.len() > config.max_sections,
        ..Default::default()
    };

    for title in titles.iter().take(config.max_sections) {
        if result.content.contains_key(title) || result.missing_sections.contains(title) {
            continue;
        }

        match index.section(title, config.max_section_lines) {
            Ok(text) => {
                trace!(title = %title, chars = text.len(), "Matched section");
                result.content.insert(title.clone(), text);
            }
            Err(error) => {
                debug!(error = %error, "Requested section has no matching heading");
                result.missing_sections.push(title.clone());
            }
        }
    }

    debug!(
        requested = result.sections_requested,
        found = result.sections_found(),
        truncated = result.truncated,
        "Extracted documentation sections"
    );

    result
}
