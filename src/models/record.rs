use serde::Serialize;

use crate::scoring::ScoreBand;

/// Placeholder for the phone number, which is never extracted.
pub const MOBILE_PLACEHOLDER: &str = "Not found in header";
/// Value used for absent profile links and entry dates.
pub const NOT_AVAILABLE: &str = "N/A";

/// Identity and contact fields taken from the resume header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: String,
    /// Profile URL or `"N/A"`.
    pub linkedin: String,
    /// Profile URL or `"N/A"`.
    pub github: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: None,
            email: None,
            mobile_number: MOBILE_PLACEHOLDER.into(),
            linkedin: NOT_AVAILABLE.into(),
            github: NOT_AVAILABLE.into(),
        }
    }
}

impl PersonalInfo {
    #[must_use]
    pub fn has_identity(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
            && self.email.as_deref().is_some_and(|e| !e.is_empty())
    }

    #[must_use]
    pub fn has_links(&self) -> bool {
        self.linkedin != NOT_AVAILABLE || self.github != NOT_AVAILABLE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub year: String,
    pub degree: String,
    pub institute: String,
}

/// A project or experience item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    /// Bracketed date token such as `[2023]`, or `"N/A"`.
    pub date: String,
    pub description: String,
}

/// Fields extracted from a resume before scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    #[serde(flatten)]
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<Entry>,
    pub experience: Vec<Entry>,
}

/// A fully analysed resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeRecord {
    #[serde(flatten)]
    pub fields: Extraction,
    /// Score in `0..=100`.
    pub score: u32,
    /// Tier of `score`.
    pub band: ScoreBand,
    pub feedback: Vec<String>,
}

/// A failed analysis. Never accompanied by partial results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    /// Render an error with its stage and cause chain.
    #[must_use]
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut error = format!("An unexpected error occurred: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            error.push_str("\ncaused by: ");
            error.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { error }
    }
}

/// Outcome of analysing one document: exactly one of record or error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    Record(ResumeRecord),
    Error(ErrorRecord),
}

impl Analysis {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
