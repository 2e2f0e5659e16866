/// Table of contents for OpenBB Workspace (llms.txt format)
pub const DEFAULT_TOC_URL: &str = "https://docs.openbb.co/workspace/llms.txt";

/// Full OpenBB Workspace documentation in a single text file
pub const DEFAULT_FULL_DOCS_URL: &str = "https://docs.openbb.co/workspace/llms-full.txt";

/// Timeout for fetching the table of contents
pub const DEFAULT_TOC_TIMEOUT_SECS: u64 = 30;

/// Timeout for fetching the full documentation, which is much larger
pub const DEFAULT_CONTENT_TIMEOUT_SECS: u64 = 60;

/// Default number of sections returned by a single content fetch
pub const DEFAULT_MAX_SECTIONS: usize = 3;

/// Upper bound a caller may request for `max_sections`
pub const MAX_SECTIONS_LIMIT: usize = 20;

/// Lines kept per extracted section before it is cut
pub const DEFAULT_MAX_SECTION_LINES: usize = 100;

/// Marker line appended to a section cut at the line limit
pub const SECTION_TRUNCATED_MARKER: &str = "... (content truncated)";
