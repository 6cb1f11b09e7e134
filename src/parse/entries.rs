use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Entry, NOT_AVAILABLE};

static DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*?\]").unwrap());

/// Split a section body into entry blocks.
///
/// A new block starts at every line that begins with an ASCII uppercase
/// letter followed by a lowercase one. The newline before it is dropped.
/// Titles in all caps or lowercase do not start a block.
fn split_blocks(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut blocks = Vec::new();
    let mut start = 0;

    for (i, _) in body.match_indices('\n') {
        if bytes.get(i + 1).is_some_and(u8::is_ascii_uppercase)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_lowercase)
        {
            blocks.push(&body[start..i]);
            start = i + 1;
        }
    }
    blocks.push(&body[start..]);
    blocks
}

fn parse_block(block: &str) -> Entry {
    let date = DATE
        .find(block)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |m| m.as_str().trim().to_string());

    let mut lines = block.trim().split('\n');
    let title = lines.next().unwrap_or_default().trim().to_string();
    let description = lines
        .filter(|line| !line.contains(date.as_str()))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    Entry {
        title,
        date,
        description,
    }
}

/// Parse a projects or experience body into titled entries.
#[must_use]
pub fn parse_entries(body: Option<&str>) -> Vec<Entry> {
    let Some(body) = body else {
        return Vec::new();
    };
    split_blocks(body)
        .into_iter()
        .filter(|block| !block.trim().is_empty())
        .map(parse_block)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_date_description() {
        let entries = parse_entries(Some("Project Alpha\n[2023]\nbuilt a thing"));
        assert_eq!(
            entries,
            vec![Entry {
                title: "Project Alpha".into(),
                date: "[2023]".into(),
                description: "built a thing".into(),
            }]
        );
    }

    // Any line opening with an uppercase then a lowercase letter begins a block.
    #[test]
    fn capitalised_description_line_starts_new_entry() {
        let entries = parse_entries(Some("Project Alpha\n[2023]\nBuilt a thing"));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Project Alpha");
        assert_eq!(entries[0].date, "[2023]");
        assert_eq!(entries[0].description, "");
        assert_eq!(entries[1].title, "Built a thing");
        assert_eq!(entries[1].date, "N/A");
    }

    #[test]
    fn splits_on_capitalised_lines() {
        let body = "Alpha Service [Jan 2023 - Mar 2023]\n- developed the API\n  improved latency\nBeta Tool\n[2022]\nwrote docs";
        let entries = parse_entries(Some(body));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Alpha Service [Jan 2023 - Mar 2023]");
        assert_eq!(entries[0].date, "[Jan 2023 - Mar 2023]");
        assert_eq!(entries[0].description, "- developed the API\nimproved latency");
        assert_eq!(entries[1].title, "Beta Tool");
        assert_eq!(entries[1].date, "[2022]");
        assert_eq!(entries[1].description, "wrote docs");
    }

    #[test]
    fn missing_date_is_na() {
        let entries = parse_entries(Some("Gamma\nsome details"));
        assert_eq!(entries[0].date, "N/A");
        assert_eq!(entries[0].description, "some details");
    }

    #[test]
    fn all_caps_title_does_not_split() {
        let entries = parse_entries(Some("Alpha\nwork\nAPI GATEWAY\nmore work"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "work\nAPI GATEWAY\nmore work");
    }

    #[test]
    fn blank_blocks_are_dropped() {
        let entries = parse_entries(Some("\n\nAlpha\nx\n   \n"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Alpha");
    }

    #[test]
    fn lines_containing_date_token_are_dropped() {
        let entries = parse_entries(Some("Alpha\nshipped [2021] release\n[2021]\nkept"));
        assert_eq!(entries[0].date, "[2021]");
        assert_eq!(entries[0].description, "kept");
    }

    #[test]
    fn undated_entry_drops_na_lines() {
        let entries = parse_entries(Some("Alpha\nstatus: N/A\nshipped"));
        assert_eq!(entries[0].date, "N/A");
        assert_eq!(entries[0].description, "shipped");
    }

    #[test]
    fn absent_or_empty_section() {
        assert!(parse_entries(None).is_empty());
        assert!(parse_entries(Some("")).is_empty());
    }
}
