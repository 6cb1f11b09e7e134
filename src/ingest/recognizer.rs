use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Label carried by person-name entities.
pub const PERSON: &str = "PERSON";

/// A named entity span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

impl Entity {
    #[must_use]
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn is_person(&self) -> bool {
        self.label == PERSON
    }
}

/// Named-entity recognition over a short text.
///
/// Entities are returned in document order. Only [`PERSON`] entities are
/// consumed by the pipeline.
pub trait PersonRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>>;
}

static NAME_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z'.-]*(?:[ \t]+[A-Z][a-zA-Z'.-]*){1,3}\b").unwrap()
});

/// Capitalised-word recognizer for use without an NER model.
///
/// Every run of two to four capitalised words on a line free of `@`, `/`
/// and digits is reported as a person.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicRecognizer;

impl HeuristicRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PersonRecognizer for HeuristicRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let entities = text
            .lines()
            .filter(|line| {
                !line.contains('@')
                    && !line.contains('/')
                    && !line.chars().any(|c| c.is_ascii_digit())
            })
            .flat_map(|line| NAME_RUN.find_iter(line))
            .map(|m| Entity::new(m.as_str().trim_end_matches(['.', '-', '\'']), PERSON))
            .collect();
        Ok(entities)
    }
}
