//! TOML settings file support for the audit.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::report::{MAX_PRINTED, OutputFormat};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Layered settings could not be merged or extracted
    Merge(Box<figment::Error>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Merge(e) => write!(f, "Invalid settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Merge(Box::new(e))
    }
}

/// Root settings structure for TOML files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    /// Failure lines printed before the rest are summarized
    pub max_printed: usize,
    /// Report format
    pub format: OutputFormat,
    /// Directory holding the theme tables; the embedded tables when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_dir: Option<PathBuf>,
    /// Log file settings
    pub logging: LoggingSettings,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            max_printed: MAX_PRINTED,
            format: OutputFormat::Text,
            theme_dir: None,
            logging: LoggingSettings::default(),
        }
    }
}

/// Log file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file path; logging is disabled when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl AuditSettings {
    /// Save settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Layer defaults, then the TOML file at `path` (if any), then
    /// `overrides`.
    ///
    /// `overrides` is any serializable value whose unset fields are skipped,
    /// such as [`Cli::to_settings_overrides`](crate::cli::Cli::to_settings_overrides).
    pub fn merged<T: Serialize>(path: Option<&Path>, overrides: &T) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("settings file not found: {}", path.display()),
                )));
            }
            figment = figment.merge(Toml::file(path));
        }
        let settings = figment.merge(Serialized::defaults(overrides)).extract()?;
        Ok(settings)
    }
}
