use serde::Serialize;

use crate::models::Extraction;

/// Verbs rewarded by the quality bonus.
pub const ACTION_VERBS: [&str; 11] = [
    "developed",
    "led",
    "managed",
    "created",
    "achieved",
    "implemented",
    "improved",
    "spearheaded",
    "applied",
    "resolved",
    "enhanced",
];

const VERB_POINTS: u32 = 2;
const MAX_VERB_BONUS: u32 = 10;
const MAX_SCORE: u32 = 100;

/// A structural or quality check that did not pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    MissingIdentity,
    MissingLinks,
    MissingEducation,
    MissingSkills,
    MissingProjects,
    MissingExperience,
    NoActionVerbs,
}

impl Finding {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingIdentity => {
                "❌ Missing name or email. Ensure they are at the top of your resume."
            }
            Self::MissingLinks => "💡 Consider adding links to your LinkedIn or GitHub profiles.",
            Self::MissingEducation => "❌ Education section is missing or could not be parsed.",
            Self::MissingSkills => {
                "❌ Skills section is missing. This is a critical section for ATS."
            }
            Self::MissingProjects => "💡 Consider adding a Projects section to showcase your work.",
            Self::MissingExperience => {
                "💡 Experience section not found. If you have relevant experience, be sure to include it."
            }
            Self::NoActionVerbs => {
                "💡 Strengthen your descriptions with action verbs like 'Developed', 'Managed', or 'Achieved'."
            }
        }
    }
}

/// Score tier used for the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    #[must_use]
    pub fn of(score: u32) -> Self {
        if score >= 85 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else {
            Self::NeedsWork
        }
    }

    #[must_use]
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Excellent => "✅ Excellent! Your resume is well-optimized for ATS.",
            Self::Good => "✅ Your resume is good, but a few tweaks could make it great.",
            Self::NeedsWork => "⚠️ Your resume needs some work to be ATS-friendly.",
        }
    }
}

/// Score plus ordered feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub score: u32,
    pub feedback: Vec<String>,
}

impl ScoreCard {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }
}

/// Distinct action verbs occurring anywhere in the text, case-insensitively.
#[must_use]
pub fn action_verbs_in(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    ACTION_VERBS
        .into_iter()
        .filter(|verb| lower.contains(verb))
        .collect()
}

/// Score an extracted resume against structural and wording checks.
///
/// Findings are reported in check order. A summary line is prepended when
/// there are no findings, or when the score is below the excellent band.
#[must_use]
pub fn score(fields: &Extraction, full_text: &str) -> ScoreCard {
    let checks: [(bool, u32, Finding); 6] = [
        (fields.personal.has_identity(), 15, Finding::MissingIdentity),
        (fields.personal.has_links(), 5, Finding::MissingLinks),
        (!fields.education.is_empty(), 15, Finding::MissingEducation),
        (!fields.skills.is_empty(), 20, Finding::MissingSkills),
        (!fields.projects.is_empty(), 20, Finding::MissingProjects),
        (!fields.experience.is_empty(), 25, Finding::MissingExperience),
    ];

    let mut total = 0u32;
    let mut findings = Vec::new();
    for (passed, points, finding) in checks {
        if passed {
            total += points;
        } else {
            findings.push(finding);
        }
    }

    let verbs = action_verbs_in(full_text);
    if verbs.is_empty() {
        findings.push(Finding::NoActionVerbs);
    } else {
        total += (verbs.len() as u32 * VERB_POINTS).min(MAX_VERB_BONUS);
    }

    let score = total.min(MAX_SCORE);
    let mut feedback: Vec<String> = findings.iter().map(|f| f.message().to_string()).collect();

    if feedback.is_empty() {
        feedback.push(ScoreBand::of(score).summary().to_string());
    } else if ScoreBand::of(score) != ScoreBand::Excellent {
        feedback.insert(0, ScoreBand::NeedsWork.summary().to_string());
    }

    tracing::debug!(score, findings = findings.len(), verbs = verbs.len(), "scored resume");
    ScoreCard { score, feedback }
}
