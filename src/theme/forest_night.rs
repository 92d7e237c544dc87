//! The Forest Night theme, driven by the TOML tables under `themes/`.
//!
//! Tables are parsed and every template validated up front, so a
//! [`ForestNight`] value can always render a theme for any configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
#[cfg(debug_assertions)]
use tracing::instrument;

use crate::options::{Configuration, Contrast, Workbench};

use super::{
    BackgroundRoles, Context, ForegroundRoles, Palette, SemanticRule, SemanticRules,
    SemanticValue, SyntaxRule, SyntaxSettings, Template, TemplateError, ThemeSource, UiColors,
};

/// File names of the theme tables, in load order.
pub const TABLE_FILES: [&str; 4] = [
    PALETTE_TABLE,
    WORKBENCH_TABLE,
    SYNTAX_TABLE,
    SEMANTIC_TABLE,
];

const PALETTE_TABLE: &str = "palette.toml";
const WORKBENCH_TABLE: &str = "workbench.toml";
const SYNTAX_TABLE: &str = "syntax.toml";
const SEMANTIC_TABLE: &str = "semantic.toml";

const EMBEDDED_PALETTE: &str = include_str!("../../themes/forest-night/palette.toml");
const EMBEDDED_WORKBENCH: &str = include_str!("../../themes/forest-night/workbench.toml");
const EMBEDDED_SYNTAX: &str = include_str!("../../themes/forest-night/syntax.toml");
const EMBEDDED_SEMANTIC: &str = include_str!("../../themes/forest-night/semantic.toml");

const ITALIC: &str = "italic";

/// Error type for loading theme tables.
#[derive(Debug)]
pub enum LoadError {
    /// A table file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A table is not valid TOML or has the wrong shape
    Parse {
        table: &'static str,
        source: toml::de::Error,
    },
    /// A color template failed to parse
    Template {
        table: &'static str,
        key: String,
        source: TemplateError,
    },
    /// A table parsed but its contents are inconsistent
    Invalid {
        table: &'static str,
        message: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Parse { table, source } => write!(f, "{}: {}", table, source),
            Self::Template { table, key, source } => {
                write!(f, "{}: {}: {}", table, key, source)
            }
            Self::Invalid { table, message } => write!(f, "{}: {}", table, message),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Template { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

// On-disk shapes

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    background: BackgroundLevels,
    foreground: ForegroundRoles,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BackgroundLevels {
    hard: BackgroundRoles,
    medium: BackgroundRoles,
    soft: BackgroundRoles,
}

type RawLayer = BTreeMap<String, String>;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSkin {
    general: RawLayer,
    high_contrast: RawLayer,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorkbenchFile {
    general: RawLayer,
    #[serde(default)]
    high_contrast: RawLayer,
    #[serde(default)]
    material: RawSkin,
    #[serde(default)]
    flat: RawSkin,
    #[serde(default, rename = "high-contrast")]
    high_contrast_skin: RawSkin,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SyntaxFile {
    rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRule {
    name: String,
    scope: String,
    foreground: Option<String>,
    font_style: Option<String>,
    #[serde(default)]
    italic_keywords: bool,
    #[serde(default)]
    italic_comments: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SemanticFile {
    tokens: Vec<RawToken>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawToken {
    name: String,
    color: Option<String>,
    font_style: Option<String>,
}

// Parsed forms

type Layer = Vec<(String, Template)>;

#[derive(Debug, Clone, Default)]
struct Skin {
    general: Layer,
    high_contrast: Layer,
}

#[derive(Debug, Clone)]
struct Rule {
    name: String,
    scope: String,
    foreground: Option<Template>,
    font_style: Option<String>,
    /// Only emitted when italic keywords are enabled
    italic_keywords: bool,
    /// Becomes italic when italic comments are enabled
    italic_comments: bool,
}

#[derive(Debug, Clone)]
enum Token {
    Color(Template),
    Style(String),
}

/// Table-driven Forest Night theme.
#[derive(Debug, Clone)]
pub struct ForestNight {
    hard: BackgroundRoles,
    medium: BackgroundRoles,
    soft: BackgroundRoles,
    foreground: ForegroundRoles,
    general: Layer,
    high_contrast: Layer,
    material: Skin,
    flat: Skin,
    high_contrast_skin: Skin,
    rules: Vec<Rule>,
    tokens: Vec<(String, Token)>,
}

impl ForestNight {
    /// The tables compiled into the binary.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_tables(
            EMBEDDED_PALETTE,
            EMBEDDED_WORKBENCH,
            EMBEDDED_SYNTAX,
            EMBEDDED_SEMANTIC,
        )
    }

    /// Load the tables from `dir`, which must contain every file in
    /// [`TABLE_FILES`].
    #[cfg_attr(debug_assertions, instrument(skip_all, fields(dir = %dir.display())))]
    pub fn from_dir(dir: &Path) -> Result<Self, LoadError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
        };

        Self::from_tables(
            &read(PALETTE_TABLE)?,
            &read(WORKBENCH_TABLE)?,
            &read(SYNTAX_TABLE)?,
            &read(SEMANTIC_TABLE)?,
        )
    }

    /// Build a theme from the text of its four tables.
    pub fn from_tables(
        palette: &str,
        workbench: &str,
        syntax: &str,
        semantic: &str,
    ) -> Result<Self, LoadError> {
        let palette: PaletteFile = parse_table(PALETTE_TABLE, palette)?;
        let workbench: WorkbenchFile = parse_table(WORKBENCH_TABLE, workbench)?;
        let syntax: SyntaxFile = parse_table(SYNTAX_TABLE, syntax)?;
        let semantic: SemanticFile = parse_table(SEMANTIC_TABLE, semantic)?;

        let rules = syntax
            .rules
            .into_iter()
            .map(parse_rule)
            .collect::<Result<Vec<_>, _>>()?;
        let tokens = semantic
            .tokens
            .into_iter()
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?;

        let theme = Self {
            hard: palette.background.hard,
            medium: palette.background.medium,
            soft: palette.background.soft,
            foreground: palette.foreground,
            general: parse_layer(workbench.general)?,
            high_contrast: parse_layer(workbench.high_contrast)?,
            material: parse_skin(workbench.material)?,
            flat: parse_skin(workbench.flat)?,
            high_contrast_skin: parse_skin(workbench.high_contrast_skin)?,
            rules,
            tokens,
        };

        debug!(
            rules = theme.rules.len(),
            tokens = theme.tokens.len(),
            "Loaded theme tables"
        );
        Ok(theme)
    }

    fn skin(&self, workbench: Workbench) -> &Skin {
        match workbench {
            Workbench::Material => &self.material,
            Workbench::Flat => &self.flat,
            Workbench::HighContrast => &self.high_contrast_skin,
        }
    }
}

impl ThemeSource for ForestNight {
    fn palette(&self, configuration: &Configuration) -> Palette {
        let background = match configuration.contrast.level() {
            Contrast::Hard => &self.hard,
            Contrast::Medium => &self.medium,
            Contrast::Soft => &self.soft,
        };
        Palette {
            background: background.clone(),
            foreground: self.foreground.clone(),
        }
    }

    fn ui_colors(&self, palette: &Palette, configuration: &Configuration) -> UiColors {
        let ctx = Context::new(palette, configuration);
        let skin = self.skin(configuration.workbench);

        let mut layers = vec![&self.general, &skin.general];
        if configuration.high_contrast {
            layers.push(&self.high_contrast);
            layers.push(&skin.high_contrast);
        }

        let mut colors = UiColors::new();
        for layer in layers {
            for (key, template) in layer {
                colors.insert(key.clone(), template.render(&ctx));
            }
        }
        colors
    }

    fn syntax_rules(&self, palette: &Palette, configuration: &Configuration) -> Vec<SyntaxRule> {
        let ctx = Context::new(palette, configuration);

        self.rules
            .iter()
            .filter(|rule| !rule.italic_keywords || configuration.italic_keywords)
            .map(|rule| {
                let font_style = if rule.italic_comments && configuration.italic_comments {
                    Some(ITALIC.to_string())
                } else {
                    rule.font_style.clone()
                };
                SyntaxRule {
                    name: rule.name.clone(),
                    scope: rule.scope.clone(),
                    settings: SyntaxSettings {
                        foreground: rule.foreground.as_ref().map(|t| t.render(&ctx)),
                        font_style,
                    },
                }
            })
            .collect()
    }

    fn semantic_rules(&self, palette: &Palette) -> SemanticRules {
        // Semantic colors only reference palette roles.
        let ctx = Context::new(palette, &Configuration::default());

        self.tokens
            .iter()
            .map(|(name, token)| SemanticRule {
                name: name.clone(),
                value: match token {
                    Token::Color(template) => SemanticValue::Color(template.render(&ctx)),
                    Token::Style(style) => SemanticValue::Style {
                        font_style: style.clone(),
                    },
                },
            })
            .collect()
    }
}

fn parse_table<T: for<'de> Deserialize<'de>>(
    table: &'static str,
    content: &str,
) -> Result<T, LoadError> {
    toml::from_str(content).map_err(|source| LoadError::Parse { table, source })
}

fn parse_template(table: &'static str, key: &str, raw: &str) -> Result<Template, LoadError> {
    raw.parse().map_err(|source| LoadError::Template {
        table,
        key: key.to_string(),
        source,
    })
}

fn parse_layer(raw: RawLayer) -> Result<Layer, LoadError> {
    raw.into_iter()
        .map(|(key, value)| {
            let template = parse_template(WORKBENCH_TABLE, &key, &value)?;
            Ok((key, template))
        })
        .collect()
}

fn parse_skin(raw: RawSkin) -> Result<Skin, LoadError> {
    Ok(Skin {
        general: parse_layer(raw.general)?,
        high_contrast: parse_layer(raw.high_contrast)?,
    })
}

fn parse_rule(raw: RawRule) -> Result<Rule, LoadError> {
    let foreground = raw
        .foreground
        .as_deref()
        .map(|fg| parse_template(SYNTAX_TABLE, &raw.name, fg))
        .transpose()?;

    Ok(Rule {
        name: raw.name,
        scope: raw.scope,
        foreground,
        font_style: raw.font_style,
        italic_keywords: raw.italic_keywords,
        italic_comments: raw.italic_comments,
    })
}

fn parse_token(raw: RawToken) -> Result<(String, Token), LoadError> {
    let token = match (raw.color, raw.font_style) {
        (Some(color), None) => Token::Color(parse_template(SEMANTIC_TABLE, &raw.name, &color)?),
        (None, Some(style)) => Token::Style(style),
        _ => {
            return Err(LoadError::Invalid {
                table: SEMANTIC_TABLE,
                message: format!(
                    "token '{}' must set exactly one of `color` or `font_style`",
                    raw.name
                ),
            });
        }
    };
    Ok((raw.name, token))
}
