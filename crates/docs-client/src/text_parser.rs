//! Parsers for the plain-text (markdown) documentation files.
//!
//! The table of contents is an `llms.txt` outline and the full documentation
//! is one long markdown document. Both parsers share the heading rules below.

pub mod section_matcher;
pub mod toc_parser;

pub use section_matcher::{extract_sections, SectionIndex};
pub use toc_parser::parse_toc;

/// A markdown ATX heading (`#` to `######`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub text: &'a str,
}

/// Parse a single line as a markdown heading
pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let trimmed = line.trim_start();
    let level = trimmed.bytes().take_while(|b| *b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &trimmed[level..];
    // `#hashtag` is not a heading
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = strip_closing_hashes(rest.trim());
    if text.is_empty() {
        return None;
    }

    Some(Heading { level, text })
}

/// Remove an optional closing sequence, as in `## Title ##`
fn strip_closing_hashes(text: &str) -> &str {
    let without = text.trim_end_matches('#');
    if without.is_empty() {
        ""
    } else if without.len() != text.len() && without.ends_with(char::is_whitespace) {
        without.trim_end()
    } else {
        text
    }
}

/// Canonical form used to compare titles: trimmed, single-spaced, lowercase
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// An opening or closing code fence line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
}

/// Parse a line as a code fence: three or more backticks or tildes, indented
/// at most three spaces. A backtick fence's info string cannot contain a
/// backtick, so one-line code like ```` ```pip install openbb``` ```` is not a fence.
fn parse_fence(line: &str) -> Option<(Fence, &str)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }

    let trimmed = &line[indent..];
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    if len < 3 {
        return None;
    }

    let info = trimmed[len..].trim();
    if marker == '`' && info.contains('`') {
        return None;
    }

    Some((Fence { marker, len }, info))
}

/// Tracks fenced code blocks so `# comments` inside them are not read as headings
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<Fence>,
}

impl FenceTracker {
    /// Feed the next line; returns true when the line is part of a fenced block.
    ///
    /// A block closes only on a bare fence of the same character that is at
    /// least as long as the opening one.
    pub(crate) fn is_fenced(&mut self, line: &str) -> bool {
        let fence = parse_fence(line);

        match (self.open, fence) {
            (None, Some((opening, _))) => {
                self.open = Some(opening);
                true
            }
            (Some(open), Some((closing, info)))
                if info.is_empty() && closing.marker == open.marker && closing.len >= open.len =>
            {
                self.open = None;
                true
            }
            (Some(_), _) => true,
            (None, None) => false,
        }
    }
}
