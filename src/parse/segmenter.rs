use crate::models::{Heading, SectionMap};

struct HeadingMatch {
    heading: Heading,
    /// Byte offset where the heading line starts.
    line_start: usize,
    /// Byte offset just past the heading line (after its newline).
    body_start: usize,
}

/// Split raw resume text into canonical sections.
///
/// A heading is recognised only when it occupies a whole line. Each body
/// runs to the next recognised heading or the end of the text. When a
/// heading recurs, the later body replaces the earlier one.
#[must_use]
pub fn segment(text: &str) -> SectionMap {
    let mut matches: Vec<HeadingMatch> = Vec::new();
    let mut offset = 0usize;

    for line in text.split_inclusive('\n') {
        if let Some(heading) = Heading::from_line(line) {
            matches.push(HeadingMatch {
                heading,
                line_start: offset,
                body_start: offset + line.len(),
            });
        }
        offset += line.len();
    }

    let mut sections = SectionMap::new();
    for (idx, m) in matches.iter().enumerate() {
        let end = matches
            .get(idx + 1)
            .map_or(text.len(), |next| next.line_start);
        let body = text[m.body_start..end].trim().to_string();
        sections.insert(m.heading, body);
    }

    tracing::debug!(
        headings = matches.len(),
        sections = sections.len(),
        "segmented resume"
    );
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_in_document_order() {
        let text = "Jane Doe\nEDUCATION\n\"2024\",\"B.Sc\",\"MIT\"\nPROJECTS\nAlpha\n[2023]\n";
        let sections = segment(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[&Heading::Education], "\"2024\",\"B.Sc\",\"MIT\"");
        assert_eq!(sections[&Heading::Projects], "Alpha\n[2023]");
    }

    #[test]
    fn no_headings_gives_empty_map() {
        let sections = segment("Just a paragraph\nabout nothing in particular\n");
        assert!(sections.is_empty());
    }

    #[test]
    fn empty_text() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn headings_match_case_insensitively_with_padding() {
        let text = "  skills and expertise  \r\nRust\r\n";
        let sections = segment(text);
        assert_eq!(sections[&Heading::SkillsAndExpertise], "Rust");
    }

    #[test]
    fn inline_heading_text_is_not_a_heading() {
        let text = "PROJECTS\nBuilt EDUCATION tools\nEducation platform\n";
        let sections = segment(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[&Heading::Projects],
            "Built EDUCATION tools\nEducation platform"
        );
    }

    #[test]
    fn recurring_heading_keeps_last_body() {
        let text = "EDUCATION\nfirst\nPROJECTS\nAlpha\nEDUCATION\nsecond\n";
        let sections = segment(text);
        assert_eq!(sections[&Heading::Education], "second");
        assert_eq!(sections[&Heading::Projects], "Alpha");
    }

    #[test]
    fn heading_at_end_has_empty_body() {
        let sections = segment("intro\nAWARDS AND ACHIEVEMENTS");
        assert_eq!(sections[&Heading::AwardsAndAchievements], "");
    }

    #[test]
    fn adjacent_headings() {
        let sections = segment("EDUCATION\nPROJECTS\nAlpha");
        assert_eq!(sections[&Heading::Education], "");
        assert_eq!(sections[&Heading::Projects], "Alpha");
    }
}
