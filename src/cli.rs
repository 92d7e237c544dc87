//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::report::OutputFormat;

/// Exhaustive WCAG 2.x contrast audit of the Forest Night theme.
#[derive(Parser, Debug, Serialize)]
#[command(name = "forest-night-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing palette.toml, workbench.toml, syntax.toml and
    /// semantic.toml (default: the tables built into the binary)
    #[arg(long, value_name = "DIR")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_dir: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Maximum number of violations to list (default: 200)
    #[arg(long, value_name = "N")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_printed: Option<usize>,

    /// Load settings from TOML file
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Save the merged settings to TOML file
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub save_config: Option<PathBuf>,

    /// Write a log to FILE (logging is off by default)
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL")]
    #[serde(skip)]
    pub log_level: Option<String>,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    #[serde(skip)]
    pub completions: Option<clap_complete::Shell>,
}

/// CLI values that override the settings file, unset fields omitted.
#[derive(Debug, Serialize)]
pub struct SettingsOverrides<'a> {
    #[serde(flatten)]
    pub cli: &'a Cli,
    #[serde(skip_serializing_if = "LoggingOverrides::is_empty")]
    pub logging: LoggingOverrides<'a>,
}

#[derive(Debug, Default, Serialize)]
pub struct LoggingOverrides<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<&'a PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<&'a str>,
}

impl LoggingOverrides<'_> {
    fn is_empty(&self) -> bool {
        self.file.is_none() && self.level.is_none()
    }
}

impl Cli {
    /// Convert CLI args to a settings layer for Figment merging.
    ///
    /// Only fields that are explicitly set on the CLI are serialized, so the
    /// layer never masks values from the settings file.
    pub fn to_settings_overrides(&self) -> SettingsOverrides<'_> {
        SettingsOverrides {
            cli: self,
            logging: LoggingOverrides {
                file: self.log_file.as_ref(),
                level: self.log_level.as_deref(),
            },
        }
    }
}
