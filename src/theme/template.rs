//! Color templates used by the theme tables.
//!
//! A template is literal text with `{name}` placeholders, e.g. `{dimRed}60`
//! or `{editor_selection_bg}`. Names are palette roles or one of the
//! configuration-derived values in [`Placeholder`].

use std::fmt;
use std::str::FromStr;

use crate::options::Configuration;

use super::{Palette, PaletteRole};

/// Something a template can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Role(PaletteRole),
    /// Workbench selection (lists, menus)
    SelectionBg,
    /// Editor text selection
    EditorSelectionBg,
    /// Other occurrences of the selected text
    EditorSelectionBgHl,
    Cursor,
    /// Two alpha digits for diagnostic backgrounds
    DiagnosticAlpha,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        let placeholder = match name {
            "selection_bg" => Self::SelectionBg,
            "editor_selection_bg" => Self::EditorSelectionBg,
            "editor_selection_bg_hl" => Self::EditorSelectionBgHl,
            "cursor" => Self::Cursor,
            "diagnostic_alpha" => Self::DiagnosticAlpha,
            other => Self::Role(PaletteRole::from_name(other)?),
        };
        Some(placeholder)
    }
}

/// Why a template failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `{` without a closing `}`
    Unterminated(String),
    /// `{name}` that is neither a palette role nor a known value
    UnknownPlaceholder(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unterminated(t) => write!(f, "unterminated placeholder in '{}'", t),
            Self::UnknownPlaceholder(name) => write!(f, "unknown placeholder '{{{}}}'", name),
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed color template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        let mut rest = s;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| TemplateError::Unterminated(s.to_string()))?;
            let name = &after[..close];
            let placeholder = Placeholder::from_name(name)
                .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
            segments.push(Segment::Placeholder(placeholder));
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }
}

impl Template {
    /// Expand every placeholder against `ctx`.
    pub fn render(&self, ctx: &Context<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p) => out.push_str(ctx.value(*p)),
            }
        }
        out
    }
}

/// Values placeholders expand to for one palette and configuration.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    palette: &'a Palette,
    selection_bg: String,
    editor_selection_bg: String,
    editor_selection_bg_hl: String,
    cursor: &'a str,
    diagnostic_alpha: &'static str,
}

impl<'a> Context<'a> {
    /// Derive selection, cursor and diagnostic values from `configuration`.
    ///
    /// Accent selections use the dimmed accent at `60`/`40`/`20` alpha; the
    /// grey selection uses `bg4` at `e0`/`c0`/`60`. The white cursor is the
    /// palette foreground.
    pub fn new(palette: &'a Palette, configuration: &Configuration) -> Self {
        let (base, alphas) = match configuration.selection.accent() {
            Some(accent) => (palette.get(accent.dim_role()), ["60", "40", "20"]),
            None => (palette.get(PaletteRole::Bg4), ["e0", "c0", "60"]),
        };
        let cursor = match configuration.cursor.accent() {
            Some(accent) => palette.get(accent.role()),
            None => palette.get(PaletteRole::Fg),
        };

        Self {
            palette,
            selection_bg: format!("{base}{}", alphas[0]),
            editor_selection_bg: format!("{base}{}", alphas[1]),
            editor_selection_bg_hl: format!("{base}{}", alphas[2]),
            cursor,
            diagnostic_alpha: configuration.diagnostic_text_background_opacity.alpha_suffix(),
        }
    }

    fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Role(role) => self.palette.get(role),
            Placeholder::SelectionBg => &self.selection_bg,
            Placeholder::EditorSelectionBg => &self.editor_selection_bg,
            Placeholder::EditorSelectionBgHl => &self.editor_selection_bg_hl,
            Placeholder::Cursor => self.cursor,
            Placeholder::DiagnosticAlpha => self.diagnostic_alpha,
        }
    }
}
