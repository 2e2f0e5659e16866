//! Guidance returned to the assistant alongside tool results.

/// How the assistant should pick titles out of the raw table of contents
pub const SECTION_SELECTION_GUIDELINES: &str = r#"This is the COMPLETE table of contents of the OpenBB Workspace documentation.
Select the sections most relevant to the user's query and pass their exact titles to 'fetch_openbb_content'.

SELECTION GUIDELINES:
1. Read both the title AND the description of each section. Titles give the primary signal; descriptions clarify scope (setup, concept, workflow or integration).
2. Match the meaning of the user's query, not just its keywords.
3. Only select sections that are genuinely relevant.
4. Return up to 3 section titles, ranked from most to least relevant.
5. If no section is relevant, select none. Do not force matches.

CITATIONS:
When answering, cite every documentation URL you relied on as
    citations=[Citation(source_info=SourceInfo(type="web", name=url), details=[{"Website": url}])]"#;

/// How the assistant should answer from the extracted sections
pub fn answer_guidelines(user_query: &str) -> String {
    format!(
        r#"User's question: {user_query}

The relevant documentation sections are in 'content'.

RESPONSE GUIDELINES:
1. Stay grounded: use only facts present in 'content'.
2. Synthesize across sections when the answer spans several of them, preferring the most specific details.
3. Cite the section title in square brackets after each claim, e.g. [Copilot Basics]; use at most two citations per claim.
4. Preserve terminology, parameter names and syntax exactly; show code verbatim in code blocks.
5. If 'content' does not hold the answer, say so and direct the user to support@openbb.co.
6. Answer in the language of the user's question.

OUTPUT STYLE:
- Direct and actionable: numbered steps for how-to questions, a compact explanation for concepts.
- Short bullet lists for options and parameters; tables only when they help."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_guidelines_embed_query() {
        let text = answer_guidelines("How do I create a dashboard?");
        assert!(text.starts_with("User's question: How do I create a dashboard?"));
        assert!(text.contains("support@openbb.co"));
    }
}
