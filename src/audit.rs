//! The contrast audit engine.
//!
//! For every configuration, resolves each checked foreground/background pair
//! to the opaque colors actually rendered and compares their WCAG contrast
//! ratio against the pair's threshold. Data problems are recorded as skip
//! reasons rather than aborting the run.

use serde::Serialize;
use tracing::{debug, debug_span};
#[cfg(debug_assertions)]
use tracing::instrument;

use crate::catalog::{
    CheckCategory, DIAGNOSTIC_PAIRS, EDITOR_BACKGROUND, PairCheck, Threshold, WORKBENCH_PAIRS,
    thresholds,
};
use crate::color::{Rgba, contrast_ratio};
use crate::options::Configuration;
use crate::resolve::{parse_base, resolve_opaque};
use crate::theme::{Palette, ThemeSource, UiColors};

/// A check whose contrast ratio fell below its threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub category: CheckCategory,
    pub label: String,
    pub ratio: f64,
    pub threshold: f64,
    pub configuration: Configuration,
}

/// Accumulated outcome of an audit run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditResult {
    /// Checks whose ratio was computed
    pub checks: usize,
    /// Skip reasons in the order they were hit, duplicates included
    pub skipped: Vec<String>,
    pub failures: Vec<Failure>,
}

impl AuditResult {
    /// Count one computed check, recording a failure if it is under threshold.
    pub fn record(
        &mut self,
        category: CheckCategory,
        label: String,
        ratio: f64,
        threshold: Threshold,
        configuration: &Configuration,
    ) {
        self.checks += 1;
        if ratio < threshold.min_ratio {
            debug!(%category, %label, ratio, threshold = threshold.min_ratio, "Contrast failure");
            self.failures.push(Failure {
                category,
                label,
                ratio,
                threshold: threshold.min_ratio,
                configuration: *configuration,
            });
        }
    }

    /// Record a check that could not be computed.
    pub fn skip(&mut self, reason: String) {
        debug!(%reason, "Skipped check");
        self.skipped.push(reason);
    }
}

/// Audit every configuration in order.
#[cfg_attr(debug_assertions, instrument(skip_all, fields(configurations = configurations.len())))]
pub fn run_audit<S: ThemeSource + ?Sized>(
    source: &S,
    configurations: &[Configuration],
) -> AuditResult {
    let mut result = AuditResult::default();
    for configuration in configurations {
        audit_configuration(source, configuration, &mut result);
    }
    debug!(
        checks = result.checks,
        skipped = result.skipped.len(),
        failures = result.failures.len(),
        "Audit complete"
    );
    result
}

/// Run the workbench, diagnostic and token checks for one configuration.
pub fn audit_configuration<S: ThemeSource + ?Sized>(
    source: &S,
    configuration: &Configuration,
    result: &mut AuditResult,
) {
    let span = debug_span!("configuration", summary = %configuration.summary());
    let _enter = span.enter();

    let palette = source.palette(configuration);
    let ui = source.ui_colors(&palette, configuration);

    for pair in WORKBENCH_PAIRS {
        check_workbench_pair(pair, &ui, configuration, result);
    }
    for pair in DIAGNOSTIC_PAIRS {
        check_diagnostic_pair(pair, &ui, configuration, result);
    }
    check_tokens(source, &palette, &ui, configuration, result);
}

fn check_workbench_pair(
    pair: &PairCheck,
    ui: &UiColors,
    configuration: &Configuration,
    result: &mut AuditResult,
) {
    // An absent base key falls back to the editor background, but reasons
    // still name the declared key.
    let base_key = pair.base.unwrap_or(EDITOR_BACKGROUND);
    let base_raw = ui.get(base_key).or_else(|| ui.get(EDITOR_BACKGROUND));
    let (Some(fg_raw), Some(bg_raw), Some(base_raw)) =
        (ui.get(pair.foreground), ui.get(pair.background), base_raw)
    else {
        result.skip(format!("Missing color key for {}", pair.label()));
        return;
    };

    let Ok(base) = parse_base(base_raw) else {
        result.skip(format!("Invalid base color {}={}", base_key, base_raw));
        return;
    };
    let Ok(background) = resolve_opaque(bg_raw, base) else {
        result.skip(format!(
            "Invalid background color {}={}",
            pair.background, bg_raw
        ));
        return;
    };
    let Ok(foreground) = resolve_opaque(fg_raw, background) else {
        result.skip(format!(
            "Invalid foreground color {}={}",
            pair.foreground, fg_raw
        ));
        return;
    };

    result.record(
        CheckCategory::Workbench,
        pair.label(),
        contrast_ratio(foreground, background),
        pair.threshold,
        configuration,
    );
}

fn check_diagnostic_pair(
    pair: &PairCheck,
    ui: &UiColors,
    configuration: &Configuration,
    result: &mut AuditResult,
) {
    let lookup = |key: Option<&str>| key.and_then(|k| ui.get(k));
    let (Some(fg_raw), Some(bg_raw), Some(base_raw)) = (
        ui.get(pair.foreground),
        ui.get(pair.background),
        lookup(pair.base),
    ) else {
        result.skip(format!("Missing diagnostic key for {}", pair.label()));
        return;
    };

    let Ok(base) = parse_base(base_raw) else {
        result.skip(format!(
            "Invalid diagnostic base color {}={}",
            pair.base.unwrap_or_default(),
            base_raw
        ));
        return;
    };
    let resolved = resolve_opaque(bg_raw, base)
        .and_then(|background| resolve_opaque(fg_raw, background).map(|fg| (fg, background)));
    let Ok((foreground, background)) = resolved else {
        result.skip(format!("Invalid diagnostic color {}", pair.label()));
        return;
    };

    result.record(
        CheckCategory::Diagnostic,
        pair.label(),
        contrast_ratio(foreground, background),
        pair.threshold,
        configuration,
    );
}

fn check_tokens<S: ThemeSource + ?Sized>(
    source: &S,
    palette: &Palette,
    ui: &UiColors,
    configuration: &Configuration,
    result: &mut AuditResult,
) {
    let Some(editor_raw) = ui.get(EDITOR_BACKGROUND) else {
        result.skip("Missing editor.background for syntax/semantic checks".to_string());
        return;
    };
    let Ok(editor) = parse_base(editor_raw) else {
        result.skip(format!("Invalid editor.background={}", editor_raw));
        return;
    };

    for rule in source.syntax_rules(palette, configuration) {
        let Some(fg_raw) = rule.settings.foreground.as_deref() else {
            continue;
        };
        check_token(
            CheckCategory::Syntax,
            &rule.name,
            fg_raw,
            editor,
            configuration,
            result,
        );
    }

    for rule in source.semantic_rules(palette) {
        let Some(color) = rule.value.color() else {
            continue;
        };
        check_token(
            CheckCategory::Semantic,
            &rule.name,
            color,
            editor,
            configuration,
            result,
        );
    }
}

fn check_token(
    category: CheckCategory,
    name: &str,
    reference: &str,
    editor: Rgba,
    configuration: &Configuration,
    result: &mut AuditResult,
) {
    let (kind, prefix) = match category {
        CheckCategory::Semantic => ("semantic", "semantic"),
        _ => ("syntax", "tokenColors"),
    };
    let Ok(foreground) = resolve_opaque(reference, editor) else {
        result.skip(format!("Invalid {} color for token {}", kind, name));
        return;
    };

    result.record(
        category,
        format!("{}:{}", prefix, name),
        contrast_ratio(foreground, editor),
        thresholds::TEXT,
        configuration,
    );
}
