//! Projection configuration.
//!
//! # Responsibility
//! - Load projection tunables and logging settings from TOML.
//! - Validate values before they reach the projector.
//!
//! # Invariants
//! - Omitted fields fall back to `ProjectionConfig::default()`.
//! - Excluded labels are matched exactly; no trimming or case folding.

use crate::logging::default_log_level;
use crate::model::note_summary::UNCATEGORIZED;
use crate::projection::pipeline::{ProjectionOptions, DEFAULT_EXCLUDED_LABELS};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Errors from configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file cannot be read.
    Io { path: PathBuf, message: String },
    /// Config text is not valid TOML for this schema.
    Parse(String),
    /// Config parsed but a value is unusable.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "failed to read config `{}`: {message}", path.display())
            }
            Self::Parse(message) => write!(f, "failed to parse config: {message}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Logging section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`; build default when omitted.
    pub level: Option<String>,
    /// Absolute log directory. Logging stays off when omitted.
    pub dir: Option<PathBuf>,
}

impl LoggingConfig {
    /// Returns the configured level or the build-mode default.
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or(default_log_level())
    }
}

/// Top-level configuration for the notes list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionConfig {
    /// Category shown for links with no enclosing category.
    pub uncategorized_label: String,
    /// Note titles hidden from the list.
    pub excluded_labels: Vec<String>,
    pub logging: LoggingConfig,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            uncategorized_label: UNCATEGORIZED.to_string(),
            excluded_labels: DEFAULT_EXCLUDED_LABELS
                .iter()
                .map(|label| (*label).to_string())
                .collect(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ProjectionConfig {
    /// Checks value-level constraints.
    ///
    /// # Errors
    /// - Returns `ConfigError::Invalid` for a blank `uncategorized_label`.
    /// - Returns `ConfigError::Invalid` for blank excluded labels.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uncategorized_label.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "uncategorized_label must not be blank".to_string(),
            ));
        }
        if let Some(index) = self
            .excluded_labels
            .iter()
            .position(|label| label.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "excluded_labels[{index}] must not be blank"
            )));
        }
        Ok(())
    }

    /// Builds projector options from this config.
    pub fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions::with_excluded(self.excluded_labels.iter().cloned())
            .root_category(self.uncategorized_label.as_str())
    }
}

/// Parses and validates config TOML text.
///
/// # Errors
/// - Returns `ConfigError::Parse` for invalid TOML or unknown keys.
/// - Returns `ConfigError::Invalid` when validation fails.
pub fn parse_config(text: &str) -> Result<ProjectionConfig, ConfigError> {
    let config: ProjectionConfig =
        toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Loads and validates a config file.
///
/// # Errors
/// - Returns `ConfigError::Io` when the file cannot be read.
/// - Propagates [`parse_config`] errors.
pub fn load_config(path: &Path) -> Result<ProjectionConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    parse_config(text.as_str())
}

#[cfg(test)]
mod tests {
    use super::{parse_config, ConfigError, ProjectionConfig};

    #[test]
    fn empty_text_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ProjectionConfig::default());
        assert_eq!(config.excluded_labels, vec!["Tutorial".to_string()]);
    }

    #[test]
    fn parses_all_sections() {
        let config = parse_config(
            r#"
uncategorized_label = "未分類"
excluded_labels = ["Tutorial", "Draft"]

[logging]
level = "debug"
dir = "/var/log/notelist"
"#,
        )
        .unwrap();

        assert_eq!(config.uncategorized_label, "未分類");
        assert_eq!(config.excluded_labels.len(), 2);
        assert_eq!(config.logging.effective_level(), "debug");

        let options = config.projection_options();
        assert_eq!(options.root_category, "未分類");
        assert!(options.excluded_labels.contains("Draft"));
    }

    #[test]
    fn rejects_blank_values_and_unknown_keys() {
        let err = parse_config(r#"uncategorized_label = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = parse_config(r#"excluded_labels = ["ok", ""]"#).unwrap_err();
        assert!(err.to_string().contains("excluded_labels[1]"));

        let err = parse_config("exclude = []").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
