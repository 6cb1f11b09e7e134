use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("cannot read document {path}: {detail}")]
    DocumentRead { path: String, detail: String },

    #[error("unsupported document type `{ext}`: {path}")]
    UnsupportedDocument { path: String, ext: String },

    #[error("person recognizer failed: {0}")]
    Recognizer(String),

    #[error("{stage} failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<AtsError>,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl AtsError {
    /// Attach the pipeline stage that produced this error.
    #[must_use]
    pub fn at(self, stage: Stage) -> Self {
        Self::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping stage wrappers.
    #[must_use]
    pub fn root(&self) -> &AtsError {
        match self {
            Self::Stage { source, .. } => source.root(),
            other => other,
        }
    }

    /// Whether the source document itself could not be turned into text.
    #[must_use]
    pub fn is_document_read(&self) -> bool {
        matches!(
            self.root(),
            Self::DocumentRead { .. } | Self::UnsupportedDocument { .. }
        )
    }
}

/// Fallible pipeline step, reported with failures.
///
/// Segmentation, the section parsers and scoring cannot fail; a missing
/// section only shows up as scoring feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extract,
    PersonalInfo,
}

impl Stage {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extract => "text extraction",
            Self::PersonalInfo => "personal info extraction",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, AtsError>;
