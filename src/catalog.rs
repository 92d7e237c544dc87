//! Static catalog of contrast checks.
//!
//! Keys name entries in the UI color mapping produced by a
//! [`ThemeSource`](crate::theme::ThemeSource). Syntax and semantic token
//! checks are derived from the rules themselves and always use
//! [`EDITOR_BACKGROUND`] at [`thresholds::TEXT`].

use std::fmt;

use serde::Serialize;

/// UI key every token check is measured against, and the fallback base for
/// workbench pairs that do not name one.
pub const EDITOR_BACKGROUND: &str = "editor.background";

/// UI key used as the foreground of the diagnostic checks.
pub const EDITOR_FOREGROUND: &str = "editor.foreground";

/// Minimum WCAG contrast ratio for a use case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub min_ratio: f64,
    pub description: &'static str,
}

/// WCAG 2.x thresholds.
pub mod thresholds {
    use super::Threshold;

    /// Normal-size text - 4.5:1
    pub const TEXT: Threshold = Threshold {
        min_ratio: 4.5,
        description: "Text",
    };

    /// Large-scale text and UI glyphs - 3:1
    pub const LARGE_UI: Threshold = Threshold {
        min_ratio: 3.0,
        description: "Large UI element",
    };
}

/// Which family of checks a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckCategory {
    Workbench,
    Diagnostic,
    Syntax,
    Semantic,
}

impl CheckCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Workbench => "workbench",
            Self::Diagnostic => "diagnostic",
            Self::Syntax => "syntax",
            Self::Semantic => "semantic",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A foreground/background pair drawn from the UI color mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairCheck {
    pub foreground: &'static str,
    pub background: &'static str,
    /// Surface the background is composited over. For workbench pairs an
    /// unset or absent base key falls back to [`EDITOR_BACKGROUND`].
    pub base: Option<&'static str>,
    pub threshold: Threshold,
}

impl PairCheck {
    const fn text(foreground: &'static str, background: &'static str, base: &'static str) -> Self {
        Self {
            foreground,
            background,
            base: Some(base),
            threshold: thresholds::TEXT,
        }
    }

    const fn ui(foreground: &'static str, background: &'static str, base: &'static str) -> Self {
        Self {
            foreground,
            background,
            base: Some(base),
            threshold: thresholds::LARGE_UI,
        }
    }

    /// Label used in reports: `<fg> on <bg>`.
    pub fn label(&self) -> String {
        format!("{} on {}", self.foreground, self.background)
    }
}

/// Workbench surfaces checked in every configuration.
pub const WORKBENCH_PAIRS: &[PairCheck] = &[
    // Editor
    PairCheck::text("foreground", "editor.background", "editor.background"),
    PairCheck::text("descriptionForeground", "editor.background", "editor.background"),
    PairCheck::text("editor.foreground", "editor.background", "editor.background"),
    PairCheck::text("editorCodeLens.foreground", "editor.background", "editor.background"),
    PairCheck::text(
        "editorInlayHint.foreground",
        "editorInlayHint.background",
        "editor.background",
    ),
    PairCheck::text(
        "editorGhostText.foreground",
        "editorGhostText.background",
        "editor.background",
    ),
    PairCheck::text("editorLineNumber.foreground", "editor.background", "editor.background"),
    PairCheck::text(
        "editorLineNumber.activeForeground",
        "editor.background",
        "editor.background",
    ),
    PairCheck::text(
        "editorGutter.commentRangeForeground",
        "editor.background",
        "editor.background",
    ),
    // Side bar and activity bar
    PairCheck::text("sideBar.foreground", "sideBar.background", "sideBar.background"),
    PairCheck::text("sideBarTitle.foreground", "sideBar.background", "sideBar.background"),
    PairCheck::text(
        "sideBarSectionHeader.foreground",
        "sideBarSectionHeader.background",
        "sideBar.background",
    ),
    PairCheck::ui(
        "activityBar.foreground",
        "activityBar.background",
        "activityBar.background",
    ),
    PairCheck::ui(
        "activityBar.inactiveForeground",
        "activityBar.background",
        "activityBar.background",
    ),
    // Tabs
    PairCheck::text("tab.activeForeground", "tab.activeBackground", "tab.activeBackground"),
    PairCheck::text(
        "tab.inactiveForeground",
        "tab.inactiveBackground",
        "tab.inactiveBackground",
    ),
    PairCheck::text(
        "tab.unfocusedActiveForeground",
        "tab.activeBackground",
        "tab.activeBackground",
    ),
    PairCheck::text(
        "tab.unfocusedInactiveForeground",
        "tab.inactiveBackground",
        "tab.inactiveBackground",
    ),
    // Status bar
    PairCheck::text("statusBar.foreground", "statusBar.background", "statusBar.background"),
    PairCheck::text(
        "statusBar.debuggingForeground",
        "statusBar.debuggingBackground",
        "statusBar.debuggingBackground",
    ),
    PairCheck::text(
        "statusBar.noFolderForeground",
        "statusBar.noFolderBackground",
        "statusBar.noFolderBackground",
    ),
    PairCheck::text(
        "statusBarItem.prominentForeground",
        "statusBarItem.prominentBackground",
        "statusBarItem.prominentBackground",
    ),
    PairCheck::text(
        "statusBarItem.remoteForeground",
        "statusBarItem.remoteBackground",
        "statusBarItem.remoteBackground",
    ),
    PairCheck::text(
        "statusBarItem.errorForeground",
        "statusBarItem.errorBackground",
        "statusBarItem.errorBackground",
    ),
    PairCheck::text(
        "statusBarItem.warningForeground",
        "statusBarItem.warningBackground",
        "statusBarItem.warningBackground",
    ),
    // Title bar, menus, dropdowns
    PairCheck::text(
        "titleBar.activeForeground",
        "titleBar.activeBackground",
        "titleBar.activeBackground",
    ),
    PairCheck::text(
        "titleBar.inactiveForeground",
        "titleBar.inactiveBackground",
        "titleBar.inactiveBackground",
    ),
    PairCheck::text("menu.foreground", "menu.background", "menu.background"),
    PairCheck::text(
        "menu.selectionForeground",
        "menu.selectionBackground",
        "menu.background",
    ),
    PairCheck::text("dropdown.foreground", "dropdown.background", "dropdown.background"),
    // Inputs and buttons
    PairCheck::text("input.foreground", "input.background", "editor.background"),
    PairCheck::text(
        "input.placeholderForeground",
        "input.background",
        "editor.background",
    ),
    PairCheck::text(
        "inputValidation.errorForeground",
        "inputValidation.errorBackground",
        "inputValidation.errorBackground",
    ),
    PairCheck::text(
        "inputValidation.infoForeground",
        "inputValidation.infoBackground",
        "inputValidation.infoBackground",
    ),
    PairCheck::text(
        "inputValidation.warningForeground",
        "inputValidation.warningBackground",
        "inputValidation.warningBackground",
    ),
    PairCheck::text("button.foreground", "button.background", "button.background"),
    PairCheck::text(
        "button.secondaryForeground",
        "button.secondaryBackground",
        "button.secondaryBackground",
    ),
    // Lists
    PairCheck::text(
        "list.activeSelectionForeground",
        "list.activeSelectionBackground",
        "sideBar.background",
    ),
    PairCheck::text(
        "list.inactiveSelectionForeground",
        "list.inactiveSelectionBackground",
        "sideBar.background",
    ),
    PairCheck::text("list.focusForeground", "list.focusBackground", "sideBar.background"),
    PairCheck::text("list.errorForeground", "sideBar.background", "sideBar.background"),
    PairCheck::text("list.warningForeground", "sideBar.background", "sideBar.background"),
    // Notifications
    PairCheck::text(
        "notificationCenterHeader.foreground",
        "notificationCenterHeader.background",
        "notificationCenterHeader.background",
    ),
    PairCheck::text(
        "notifications.foreground",
        "notifications.background",
        "notifications.background",
    ),
    // Peek view
    PairCheck::text(
        "peekViewResult.fileForeground",
        "peekViewResult.background",
        "peekViewResult.background",
    ),
    PairCheck::text(
        "peekViewResult.lineForeground",
        "peekViewResult.background",
        "peekViewResult.background",
    ),
    PairCheck::text(
        "peekViewResult.selectionForeground",
        "peekViewResult.selectionBackground",
        "peekViewResult.background",
    ),
    PairCheck::text(
        "peekViewTitleDescription.foreground",
        "peekViewTitle.background",
        "peekViewTitle.background",
    ),
    PairCheck::text(
        "peekViewTitleLabel.foreground",
        "peekViewTitle.background",
        "peekViewTitle.background",
    ),
    // Widgets
    PairCheck::text(
        "editorSuggestWidget.foreground",
        "editorSuggestWidget.background",
        "editorSuggestWidget.background",
    ),
    PairCheck::text(
        "editorSuggestWidget.highlightForeground",
        "editorSuggestWidget.background",
        "editorSuggestWidget.background",
    ),
    PairCheck::text(
        "editorWidget.foreground",
        "editorWidget.background",
        "editorWidget.background",
    ),
    // Text
    PairCheck::text("terminal.foreground", "editor.background", "editor.background"),
    PairCheck::text("textLink.foreground", "editor.background", "editor.background"),
    PairCheck::text("textLink.activeForeground", "editor.background", "editor.background"),
    PairCheck::text(
        "textPreformat.foreground",
        "textCodeBlock.background",
        "textCodeBlock.background",
    ),
    // Settings editor
    PairCheck::text("settings.headerForeground", "editor.background", "editor.background"),
    PairCheck::text(
        "settings.numberInputForeground",
        "settings.numberInputBackground",
        "settings.numberInputBackground",
    ),
    PairCheck::text(
        "settings.textInputForeground",
        "settings.textInputBackground",
        "settings.textInputBackground",
    ),
    PairCheck::text(
        "settings.checkboxForeground",
        "settings.checkboxBackground",
        "settings.checkboxBackground",
    ),
    PairCheck::text(
        "settings.dropdownForeground",
        "settings.dropdownBackground",
        "settings.dropdownBackground",
    ),
    // Quick pick and panel
    PairCheck::text(
        "pickerGroup.foreground",
        "editorWidget.background",
        "editorWidget.background",
    ),
    PairCheck::text(
        "panelTitle.activeForeground",
        "panel.background",
        "panel.background",
    ),
    PairCheck::text(
        "panelTitle.inactiveForeground",
        "panel.background",
        "panel.background",
    ),
];

/// Editor text over each diagnostic severity background.
pub const DIAGNOSTIC_PAIRS: &[PairCheck] = &[
    PairCheck::text(EDITOR_FOREGROUND, "editorError.background", EDITOR_BACKGROUND),
    PairCheck::text(EDITOR_FOREGROUND, "editorWarning.background", EDITOR_BACKGROUND),
    PairCheck::text(EDITOR_FOREGROUND, "editorInfo.background", EDITOR_BACKGROUND),
];
