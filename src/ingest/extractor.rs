use std::collections::HashMap;
use std::path::Path;

use crate::config::Config;
use crate::error::{AtsError, Result};

/// Turns a document on disk into raw UTF-8 text.
pub trait TextExtractor: Send + Sync {
    /// Format identifier.
    fn format(&self) -> &str;

    /// Read the document at `path` and return its text.
    fn extract(&self, path: &Path) -> Result<String>;
}

fn read_error(path: &Path, detail: impl std::fmt::Display) -> AtsError {
    AtsError::DocumentRead {
        path: path.to_string_lossy().into(),
        detail: detail.to_string(),
    }
}

/// PDF text extractor.
pub struct PdfExtractor;

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfExtractor {
    fn format(&self) -> &'static str {
        "pdf"
    }

    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;
        pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| read_error(path, format!("PDF extraction error: {e}")))
    }
}

/// Reads the file as UTF-8 text.
pub struct PlainTextExtractor;

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainTextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn format(&self) -> &'static str {
        "plaintext"
    }

    fn extract(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| read_error(path, e))
    }
}

/// Routes documents to an extractor by file extension.
pub struct DocumentExtractor {
    extractors: HashMap<String, Box<dyn TextExtractor>>,
}

impl DocumentExtractor {
    /// PDF plus the plain-text extensions named in the config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut extractors: HashMap<String, Box<dyn TextExtractor>> = HashMap::new();
        extractors.insert("pdf".into(), Box::new(PdfExtractor::new()));
        for ext in config.plain_text_extensions() {
            extractors.insert(ext, Box::new(PlainTextExtractor::new()));
        }
        Self { extractors }
    }
}

impl TextExtractor for DocumentExtractor {
    fn format(&self) -> &'static str {
        "document"
    }

    fn extract(&self, path: &Path) -> Result<String> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match self.extractors.get(&ext) {
            Some(extractor) => {
                tracing::debug!(path = %path.display(), format = extractor.format(), "extracting text");
                extractor.extract(path)
            }
            None => Err(AtsError::UnsupportedDocument {
                path: path.to_string_lossy().into(),
                ext,
            }),
        }
    }
}
