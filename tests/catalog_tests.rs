use std::collections::HashSet;

use forest_night::catalog::{
    CheckCategory, DIAGNOSTIC_PAIRS, EDITOR_BACKGROUND, EDITOR_FOREGROUND, WORKBENCH_PAIRS,
    thresholds,
};

#[test]
fn test_workbench_pair_count() {
    assert_eq!(WORKBENCH_PAIRS.len(), 64);
}

#[test]
fn test_workbench_pairs_are_unique() {
    let labels: HashSet<String> = WORKBENCH_PAIRS.iter().map(|p| p.label()).collect();
    assert_eq!(labels.len(), WORKBENCH_PAIRS.len());
}

#[test]
fn test_workbench_thresholds() {
    for pair in WORKBENCH_PAIRS {
        let expected = if pair.foreground.starts_with("activityBar.") {
            thresholds::LARGE_UI
        } else {
            thresholds::TEXT
        };
        assert_eq!(pair.threshold, expected, "{}", pair.label());
    }
}

#[test]
fn test_no_key_is_both_foreground_and_surface() {
    let foregrounds: HashSet<&str> = WORKBENCH_PAIRS.iter().map(|p| p.foreground).collect();
    for pair in WORKBENCH_PAIRS {
        assert!(!foregrounds.contains(pair.background));
        assert!(pair.base.is_none_or(|base| !foregrounds.contains(base)));
    }
}

#[test]
fn test_diagnostic_pairs() {
    let backgrounds: Vec<&str> = DIAGNOSTIC_PAIRS.iter().map(|p| p.background).collect();
    assert_eq!(
        backgrounds,
        [
            "editorError.background",
            "editorWarning.background",
            "editorInfo.background"
        ]
    );
    for pair in DIAGNOSTIC_PAIRS {
        assert_eq!(pair.foreground, EDITOR_FOREGROUND);
        assert_eq!(pair.base, Some(EDITOR_BACKGROUND));
        assert_eq!(pair.threshold.min_ratio, 4.5);
    }
}

#[test]
fn test_threshold_values() {
    assert_eq!(thresholds::TEXT.min_ratio, 4.5);
    assert_eq!(thresholds::LARGE_UI.min_ratio, 3.0);
}

#[test]
fn test_label_format() {
    assert_eq!(WORKBENCH_PAIRS[0].label(), "foreground on editor.background");
}

#[test]
fn test_category_names() {
    let names: Vec<String> = [
        CheckCategory::Workbench,
        CheckCategory::Diagnostic,
        CheckCategory::Syntax,
        CheckCategory::Semantic,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(names, ["workbench", "diagnostic", "syntax", "semantic"]);
}
