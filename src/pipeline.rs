//! Resume analysis pipeline.
//!
//! Sequences text extraction, segmentation, the field parsers and scoring
//! over one document. Any failure yields an [`ErrorRecord`] and no partial
//! record.

use std::path::Path;

use crate::config::{Config, DEFAULT_HEADER_LINES};
use crate::error::{Result, Stage};
use crate::ingest::{DocumentExtractor, HeuristicRecognizer, PersonRecognizer, TextExtractor};
use crate::models::{Analysis, ErrorRecord, Extraction, Heading, ResumeRecord, SectionMap};
use crate::parse;
use crate::scoring;

/// Section bodies consumed by each structured field.
pub const EDUCATION_SECTION: Heading = Heading::Education;
pub const SKILLS_SECTION: Heading = Heading::SkillsAndExpertise;
pub const PROJECTS_SECTION: Heading = Heading::Projects;
pub const EXPERIENCE_SECTION: Heading = Heading::EntrepreneurialExperiences;

/// Runs the full analysis over documents with injected collaborators.
pub struct Analyzer {
    extractor: Box<dyn TextExtractor>,
    recognizer: Box<dyn PersonRecognizer>,
    header_lines: usize,
}

impl Analyzer {
    #[must_use]
    pub fn new(extractor: Box<dyn TextExtractor>, recognizer: Box<dyn PersonRecognizer>) -> Self {
        Self {
            extractor,
            recognizer,
            header_lines: DEFAULT_HEADER_LINES,
        }
    }

    /// Document extractor from config plus the heuristic recognizer.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(DocumentExtractor::from_config(config)),
            Box::new(HeuristicRecognizer::new()),
        )
        .with_header_lines(config.settings.extraction.header_lines)
    }

    #[must_use]
    pub fn with_header_lines(mut self, lines: usize) -> Self {
        self.header_lines = lines;
        self
    }

    /// Analyse a document, converting any failure into an error record.
    pub fn analyze(&self, path: &Path) -> Analysis {
        match self.try_analyze(path) {
            Ok(record) => Analysis::Record(record),
            Err(e) => {
                tracing::warn!(path = %path.display(), "analysis failed: {e}");
                Analysis::Error(ErrorRecord::from_error(&e))
            }
        }
    }

    /// Extract text from a document and analyse it.
    pub fn try_analyze(&self, path: &Path) -> Result<ResumeRecord> {
        let text = self
            .extractor
            .extract(path)
            .map_err(|e| e.at(Stage::Extract))?;
        self.analyze_text(&text)
    }

    /// Analyse raw resume text.
    pub fn analyze_text(&self, text: &str) -> Result<ResumeRecord> {
        let sections = parse::segment(text);
        let fields = self.extract_fields(text, &sections)?;
        let card = scoring::score(&fields, text);

        tracing::info!(
            score = card.score,
            feedback = card.feedback.len(),
            "analysed resume"
        );
        Ok(ResumeRecord {
            fields,
            score: card.score,
            band: card.band(),
            feedback: card.feedback,
        })
    }

    /// Run the field parsers over the text and its sections.
    pub fn extract_fields(&self, text: &str, sections: &SectionMap) -> Result<Extraction> {
        let body = |heading: Heading| sections.get(&heading).map(String::as_str);

        let personal =
            parse::extract_personal_info(text, self.header_lines, self.recognizer.as_ref())
                .map_err(|e| e.at(Stage::PersonalInfo))?;

        let fields = Extraction {
            personal,
            education: parse::parse_education(body(EDUCATION_SECTION)),
            skills: parse::extract_skills(body(SKILLS_SECTION)),
            projects: parse::parse_entries(body(PROJECTS_SECTION)),
            experience: parse::parse_entries(body(EXPERIENCE_SECTION)),
        };

        tracing::debug!(
            education = fields.education.len(),
            skills = fields.skills.len(),
            projects = fields.projects.len(),
            experience = fields.experience.len(),
            "extracted fields"
        );
        Ok(fields)
    }
}
