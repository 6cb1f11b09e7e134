use std::sync::LazyLock;

use regex::Regex;

use crate::models::EducationEntry;

static TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]+)"\s*,\s*"([^"]+)"\s*,\s*"([^"]+)""#).unwrap()
});

/// Parse `"<year>", "<degree>", "<institute>"` triples from an education body.
///
/// Only quoted triples are recognised; any other text is ignored, so a
/// conventionally formatted section yields no entries.
#[must_use]
pub fn parse_education(body: Option<&str>) -> Vec<EducationEntry> {
    let Some(body) = body else {
        return Vec::new();
    };
    TRIPLE
        .captures_iter(body)
        .map(|caps| EducationEntry {
            year: caps[1].trim().to_string(),
            degree: caps[2].trim().to_string(),
            institute: caps[3].trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_triple() {
        let entries = parse_education(Some(r#""2024","M.TECH","IIT Delhi""#));
        assert_eq!(
            entries,
            vec![EducationEntry {
                year: "2024".into(),
                degree: "M.TECH".into(),
                institute: "IIT Delhi".into(),
            }]
        );
    }

    #[test]
    fn parses_multiple_in_order_with_noise() {
        let body = "Degrees:\n\"2024\" , \"M.TECH \", \" IIT Delhi\"\nthen\n\"2020\",\"B.TECH\",\"NIT Trichy\" (honours)";
        let entries = parse_education(Some(body));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, "M.TECH");
        assert_eq!(entries[0].institute, "IIT Delhi");
        assert_eq!(entries[1].year, "2020");
    }

    #[test]
    fn unquoted_body_yields_nothing() {
        let entries = parse_education(Some("B.Sc Computer Science, MIT, 2019"));
        assert!(entries.is_empty());
    }

    #[test]
    fn absent_section() {
        assert!(parse_education(None).is_empty());
    }
}
