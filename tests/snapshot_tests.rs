//! Snapshot tests for report rendering and theme output.
//!
//! Uses insta inline snapshots. These capture current output and detect
//! regressions in the report format or the rendered theme colors.

use forest_night::audit::{AuditResult, Failure};
use forest_night::catalog::CheckCategory;
use forest_night::options::{
    Configuration, ContrastSetting, Cursor, DiagnosticOpacity, Selection, Workbench,
};
use forest_night::report::{MAX_PRINTED, Report};
use forest_night::theme::{ForestNight, ThemeSource};

fn sample_result() -> AuditResult {
    AuditResult {
        checks: 10,
        skipped: Vec::new(),
        failures: vec![
            Failure {
                category: CheckCategory::Workbench,
                label: "foreground on editor.background".into(),
                ratio: 3.2,
                threshold: 4.5,
                configuration: Configuration::default(),
            },
            Failure {
                category: CheckCategory::Syntax,
                label: "tokenColors:Comment".into(),
                ratio: 1.0,
                threshold: 4.5,
                configuration: Configuration {
                    contrast: ContrastSetting::Hard,
                    workbench: Workbench::Flat,
                    selection: Selection::Red,
                    cursor: Cursor::Aqua,
                    diagnostic_text_background_opacity: DiagnosticOpacity::Quarter,
                    high_contrast: true,
                    ..Default::default()
                },
            },
        ],
    }
}

#[test]
fn snapshot_failure_text() {
    let result = sample_result();
    let output = Report::new(&result, MAX_PRINTED).to_text();
    insta::assert_snapshot!(output.stderr.trim_end(), @r"
    A11y contrast audit failed: 2 violations across 10 checks.
    1.00 < 4.5 | syntax | tokenColors:Comment | contrast=hard workbench=flat selection=red cursor=aqua diag=25% highContrast=true
    3.20 < 4.5 | workbench | foreground on editor.background | contrast=medium workbench=material selection=grey cursor=white diag=0% highContrast=false
    ");
}

#[test]
fn snapshot_skip_text() {
    let mut result = sample_result();
    result.skipped = vec![
        "Missing editor.background for syntax/semantic checks".into(),
        "Invalid semantic color for token variable".into(),
        "Missing editor.background for syntax/semantic checks".into(),
    ];
    let output = Report::new(&result, MAX_PRINTED).to_text();
    insta::assert_snapshot!(output.stderr.trim_end(), @r"
    Skipped 3 checks due to missing/invalid colors:
    - Missing editor.background for syntax/semantic checks
    - Invalid semantic color for token variable
    ");
}

#[test]
fn snapshot_passed_yaml() {
    let result = AuditResult {
        checks: 366,
        ..Default::default()
    };
    let yaml = Report::new(&result, MAX_PRINTED).to_yaml().unwrap();
    insta::assert_snapshot!(yaml.trim_end(), @r"
    verdict: passed
    checks: 366
    skip_count: 0
    skipped: []
    failures: []
    failure_count: 0
    not_shown: 0
    ");
}

#[test]
fn snapshot_default_editor_colors() {
    let theme = ForestNight::embedded().unwrap();
    let config = Configuration::default();
    let ui = theme.ui_colors(&theme.palette(&config), &config);

    let keys = [
        "editor.background",
        "editor.foreground",
        "editor.selectionBackground",
        "editorCursor.foreground",
        "editorError.background",
        "selection.background",
    ];
    let lines: Vec<String> = keys.iter().map(|k| format!("{k} = {}", ui[*k])).collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    editor.background = #2d353b
    editor.foreground = #d3c6aa
    editor.selectionBackground = #475258c0
    editorCursor.foreground = #d3c6aa
    editorError.background = #543a4800
    selection.background = #475258e0
    ");
}
