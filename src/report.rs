//! Turning an [`AuditResult`] into a verdict and printable output.

use std::collections::HashSet;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::audit::{AuditResult, Failure};

/// Default cap on failure lines in the text report.
pub const MAX_PRINTED: usize = 200;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,
    /// JSON document on stdout
    Json,
    /// YAML document on stdout
    Yaml,
}

/// Overall outcome of an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Every check computed and met its threshold
    Passed,
    /// Some checks could not be computed; contrast failures are withheld
    Skipped,
    /// Every check computed, some below threshold
    Failed,
}

/// The reportable view of an audit: sorted, deduplicated and truncated.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub verdict: Verdict,
    pub checks: usize,
    /// Checks skipped, duplicates included
    pub skip_count: usize,
    /// Unique skip reasons, first-seen order
    pub skipped: Vec<&'a str>,
    /// Worst failures first, at most `max_printed`
    pub failures: Vec<&'a Failure>,
    /// Total failures, including those not listed
    pub failure_count: usize,
    pub not_shown: usize,
}

/// Rendered text, split by destination stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

impl<'a> Report<'a> {
    /// Build the report for `result`, listing at most `max_printed` failures.
    ///
    /// Skips take precedence: when any check was skipped the verdict is
    /// [`Verdict::Skipped`] and no failures are listed.
    pub fn new(result: &'a AuditResult, max_printed: usize) -> Self {
        if !result.skipped.is_empty() {
            let mut seen = HashSet::new();
            let skipped = result
                .skipped
                .iter()
                .map(String::as_str)
                .filter(|reason| seen.insert(*reason))
                .collect();
            return Self {
                verdict: Verdict::Skipped,
                checks: result.checks,
                skip_count: result.skipped.len(),
                skipped,
                failures: Vec::new(),
                failure_count: result.failures.len(),
                not_shown: 0,
            };
        }

        let mut failures: Vec<&Failure> = result.failures.iter().collect();
        // Stable, so equal ratios keep accumulation order.
        failures.sort_by(|a, b| a.ratio.total_cmp(&b.ratio));

        let failure_count = failures.len();
        failures.truncate(max_printed);
        let verdict = if failure_count == 0 {
            Verdict::Passed
        } else {
            Verdict::Failed
        };

        Self {
            verdict,
            checks: result.checks,
            skip_count: 0,
            skipped: Vec::new(),
            not_shown: failure_count - failures.len(),
            failures,
            failure_count,
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }

    /// Human-readable report. The pass line goes to stdout, everything else
    /// to stderr.
    pub fn to_text(&self) -> Output {
        let mut out = Output::default();

        match self.verdict {
            Verdict::Passed => push_line(
                &mut out.stdout,
                format_args!(
                    "A11y contrast audit passed: {} checks across all generated variants.",
                    self.checks
                ),
            ),
            Verdict::Skipped => {
                push_line(
                    &mut out.stderr,
                    format_args!(
                        "Skipped {} checks due to missing/invalid colors:",
                        self.skip_count
                    ),
                );
                for reason in &self.skipped {
                    push_line(&mut out.stderr, format_args!("- {}", reason));
                }
            }
            Verdict::Failed => {
                push_line(
                    &mut out.stderr,
                    format_args!(
                        "A11y contrast audit failed: {} violations across {} checks.",
                        self.failure_count, self.checks
                    ),
                );
                for failure in &self.failures {
                    push_line(&mut out.stderr, failure_line(failure));
                }
                if self.not_shown > 0 {
                    push_line(
                        &mut out.stderr,
                        format_args!("... {} additional violations not shown", self.not_shown),
                    );
                }
            }
        }

        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Append `line` and a newline to `buf`.
fn push_line(buf: &mut String, line: impl fmt::Display) {
    buf.push_str(&line.to_string());
    buf.push('\n');
}

/// One failure as `<ratio> < <threshold> | <category> | <label> | <summary>`.
pub fn failure_line(failure: &Failure) -> String {
    format!(
        "{:.2} < {:.1} | {} | {} | {}",
        failure.ratio,
        failure.threshold,
        failure.category,
        failure.label,
        failure.configuration.summary()
    )
}
