use std::collections::HashSet;

/// Extract a flat, de-duplicated skill list from a skills body.
///
/// A line without a colon is one skill. For a line with a colon, the text
/// after the first colon is split on commas. Skills keep the order in which
/// they first appear.
#[must_use]
pub fn extract_skills(body: Option<&str>) -> Vec<String> {
    let Some(body) = body else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut skills = Vec::new();
    let mut push = |skill: &str| {
        if !skill.is_empty() && seen.insert(skill.to_string()) {
            skills.push(skill.to_string());
        }
    };

    for line in body.split('\n') {
        match line.split_once(':') {
            Some((_, rest)) => rest.split(',').map(str::trim).for_each(&mut push),
            None => push(line.trim()),
        }
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labelled_and_bare_lines() {
        let skills = extract_skills(Some("Languages: Python, Go\nLeadership"));
        assert_eq!(skills, vec!["Python", "Go", "Leadership"]);
    }

    #[test]
    fn bare_line_is_not_split_on_commas() {
        let skills = extract_skills(Some("Public speaking, writing"));
        assert_eq!(skills, vec!["Public speaking, writing"]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let skills = extract_skills(Some("Tools: Git, Docker\nCloud: AWS, Docker\nGit"));
        assert_eq!(skills, vec!["Git", "Docker", "AWS"]);
    }

    #[test]
    fn empty_pieces_and_lines_are_skipped() {
        let skills = extract_skills(Some("Languages: Rust, , Go,\n\n   \nFrameworks:\n"));
        assert_eq!(skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn later_colons_stay_inside_skill() {
        let skills = extract_skills(Some("Protocols: HTTP, URL: scheme"));
        assert_eq!(skills, vec!["HTTP", "URL: scheme"]);
    }

    #[test]
    fn absent_section() {
        assert!(extract_skills(None).is_empty());
    }
}
