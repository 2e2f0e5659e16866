use openbb_docs_core::SectionDescriptor;

/// Keep the sections whose title, category or description contains `query`
/// (case-insensitive). A missing or blank query keeps everything. TOC order
/// is preserved; there is no ranking.
pub fn filter_sections(
    sections: Vec<SectionDescriptor>,
    query: Option<&str>,
) -> Vec<SectionDescriptor> {
    let Some(needle) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return sections;
    };
    let needle = needle.to_lowercase();

    sections
        .into_iter()
        .filter(|section| matches_query(section, &needle))
        .collect()
}

/// `needle` must already be lowercase
fn matches_query(section: &SectionDescriptor, needle: &str) -> bool {
    [&section.title, &section.category, &section.description]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
