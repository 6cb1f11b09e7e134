use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AtsError, Result};

/// Config filename looked up in the working directory.
pub const CONFIG_FILE: &str = "resume-ats.toml";
/// Number of leading lines treated as the resume header.
pub const DEFAULT_HEADER_LINES: usize = 5;

/// Runtime configuration: where settings came from plus the settings themselves.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the config file (may not exist).
    pub config_path: PathBuf,
    /// Settings loaded from the config file, or defaults.
    pub settings: UserSettings,
}

/// User-configurable settings from resume-ats.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Document extraction settings.
    pub extraction: ExtractionSettings,
    /// Output configuration.
    pub output: OutputSettings,
}

/// Extraction-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    /// Leading lines searched for name, email and profile links.
    pub header_lines: usize,
    /// Extensions read as UTF-8 text rather than PDF.
    pub plain_text_extensions: Vec<String>,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            header_lines: DEFAULT_HEADER_LINES,
            plain_text_extensions: vec!["txt".into(), "text".into(), "md".into()],
        }
    }
}

/// Output-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format: "pretty" (default) or "minified".
    pub format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: "pretty".into(),
        }
    }
}

impl OutputSettings {
    #[must_use]
    pub fn is_pretty(&self) -> bool {
        self.format != "minified"
    }
}

impl Config {
    /// Config rooted at a directory; loads `resume-ats.toml` there if present.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let config_path = dir.as_ref().join(CONFIG_FILE);
        let settings = Self::load_settings(&config_path).unwrap_or_default();
        Self {
            config_path,
            settings,
        }
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist and parse. Without one, the working
    /// directory's `resume-ats.toml` is used when readable, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    AtsError::Config(format!("cannot read {}: {e}", path.display()))
                })?;
                let settings = toml::from_str(&content).map_err(|e| {
                    AtsError::Config(format!("invalid {}: {e}", path.display()))
                })?;
                Ok(Self {
                    config_path: path.to_path_buf(),
                    settings,
                })
            }
            None => {
                let cwd = std::env::current_dir()
                    .map_err(|e| AtsError::Config(format!("cannot get cwd: {e}")))?;
                Ok(Self::new(cwd))
            }
        }
    }

    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), "ignoring invalid config: {e}");
                None
            }
        }
    }

    /// Save current settings to the config file.
    pub fn save_settings(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| AtsError::Config(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Configured plain-text extensions, lower-cased without a leading dot.
    ///
    /// `pdf` is always handled by the PDF extractor and is skipped here.
    #[must_use]
    pub fn plain_text_extensions(&self) -> Vec<String> {
        let mut exts: Vec<String> = Vec::new();
        for ext in &self.settings.extraction.plain_text_extensions {
            let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
            if ext.is_empty() || ext == "pdf" || exts.contains(&ext) {
                continue;
            }
            exts.push(ext);
        }
        exts
    }
}
