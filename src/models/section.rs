use std::collections::BTreeMap;

use serde::Serialize;

/// A canonical resume section heading.
///
/// Variant order is the recognition order and the iteration order of a
/// [`SectionMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Heading {
    #[serde(rename = "EDUCATION")]
    Education,
    #[serde(rename = "PROJECTS")]
    Projects,
    #[serde(rename = "COMPETITION/CONFERENCE")]
    CompetitionConference,
    #[serde(rename = "ENTREPRENEURIAL EXPERIENCES")]
    EntrepreneurialExperiences,
    #[serde(rename = "SKILLS AND EXPERTISE")]
    SkillsAndExpertise,
    #[serde(rename = "COURSEWORK INFORMATION")]
    CourseworkInformation,
    #[serde(rename = "POSITIONS OF RESPONSIBILITY")]
    PositionsOfResponsibility,
    #[serde(rename = "AWARDS AND ACHIEVEMENTS")]
    AwardsAndAchievements,
    #[serde(rename = "EXTRA CURRICULAR ACTIVITIES")]
    ExtraCurricularActivities,
}

impl Heading {
    pub const ALL: [Heading; 9] = [
        Self::Education,
        Self::Projects,
        Self::CompetitionConference,
        Self::EntrepreneurialExperiences,
        Self::SkillsAndExpertise,
        Self::CourseworkInformation,
        Self::PositionsOfResponsibility,
        Self::AwardsAndAchievements,
        Self::ExtraCurricularActivities,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Education => "EDUCATION",
            Self::Projects => "PROJECTS",
            Self::CompetitionConference => "COMPETITION/CONFERENCE",
            Self::EntrepreneurialExperiences => "ENTREPRENEURIAL EXPERIENCES",
            Self::SkillsAndExpertise => "SKILLS AND EXPERTISE",
            Self::CourseworkInformation => "COURSEWORK INFORMATION",
            Self::PositionsOfResponsibility => "POSITIONS OF RESPONSIBILITY",
            Self::AwardsAndAchievements => "AWARDS AND ACHIEVEMENTS",
            Self::ExtraCurricularActivities => "EXTRA CURRICULAR ACTIVITIES",
        }
    }

    /// Match a whole line against the canonical headings.
    ///
    /// Surrounding whitespace is ignored and case is not significant, but
    /// the heading must be the entire line.
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        Self::ALL
            .into_iter()
            .find(|h| h.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section bodies keyed by heading. Bodies are trimmed.
pub type SectionMap = BTreeMap<Heading, String>;
