use super::{normalize_title, parse_heading};
use once_cell::sync::Lazy;
use openbb_docs_core::SectionDescriptor;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, trace};

/// List item marker: `-`, `*`, `+` or an ordered `1.` / `1)`
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:[-*+]|\d+[.)])\s+(.*)$").expect("valid list item regex"));

/// Markdown link with an optional link title: `[text](url "title")`
static MARKDOWN_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\[([^\]]+)\]\(\s*([^)\s]+)(?:\s+"[^"]*")?\s*\)"#).expect("valid link regex")
});

/// Separators allowed between a link and its description
const DESCRIPTION_SEPARATORS: &[char] = &[':', '-', '–', '—'];

/// Parse an `llms.txt` table of contents into section descriptors.
///
/// Headings set the category for the entries below them. Each list item
/// holding a markdown link becomes one section; anything else is skipped.
/// When a title appears more than once (case-insensitively) the first
/// entry is kept.
pub fn parse_toc(toc_content: &str) -> Vec<SectionDescriptor> {
    let mut sections = Vec::new();
    let mut seen_titles = HashSet::new();
    let mut current_category = String::new();
    let mut skipped_lines = 0usize;

    for line in toc_content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(heading) = parse_heading(line) {
            current_category = heading.text.to_string();
            trace!(category = %current_category, "TOC category");
            continue;
        }

        let Some(section) = parse_entry(line, &current_category) else {
            skipped_lines += 1;
            continue;
        };

        if !seen_titles.insert(normalize_title(&section.title)) {
            debug!(title = %section.title, "Skipping duplicate TOC entry");
            continue;
        }

        sections.push(section);
    }

    debug!(
        sections = sections.len(),
        skipped_lines = skipped_lines,
        "Parsed table of contents"
    );

    sections
}

fn parse_entry(line: &str, category: &str) -> Option<SectionDescriptor> {
    let item = LIST_ITEM.captures(line)?.get(1)?.as_str();
    let link = MARKDOWN_LINK.captures(item)?;

    let title = link.get(1)?.as_str().trim();
    if title.is_empty() {
        return None;
    }
    let url = link.get(2)?.as_str().trim();
    let link_end = link.get(0)?.end();

    let description = item[link_end..]
        .trim_start()
        .trim_start_matches(DESCRIPTION_SEPARATORS)
        .trim();

    let description = if !description.is_empty() {
        description.to_string()
    } else if category.is_empty() {
        title.to_string()
    } else {
        format!("{category}: {title}")
    };

    Some(SectionDescriptor::new(title, category, url, description))
}
