use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::ingest::PersonRecognizer;
use crate::models::{PersonalInfo, MOBILE_PLACEHOLDER, NOT_AVAILABLE};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+").unwrap());
static LINKEDIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap());
static GITHUB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)github\.com/[\w-]+").unwrap());

/// The first `lines` lines of the document.
#[must_use]
pub fn header(text: &str, lines: usize) -> String {
    text.split('\n').take(lines).collect::<Vec<_>>().join("\n")
}

fn profile_url(re: &Regex, header: &str) -> String {
    re.find(header)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |m| format!("https://www.{}", m.as_str()))
}

/// Pull name, email and profile links from the resume header.
///
/// The phone number is not extracted; `mobile_number` is always the
/// placeholder.
pub fn extract_personal_info(
    text: &str,
    header_lines: usize,
    recognizer: &dyn PersonRecognizer,
) -> Result<PersonalInfo> {
    let header = header(text, header_lines);

    let name = recognizer
        .recognize(&header)?
        .into_iter()
        .find(|e| e.is_person())
        .map(|e| e.text);

    Ok(PersonalInfo {
        name,
        email: EMAIL.find(&header).map(|m| m.as_str().to_string()),
        mobile_number: MOBILE_PLACEHOLDER.into(),
        linkedin: profile_url(&LINKEDIN, &header),
        github: profile_url(&GITHUB, &header),
    })
}
