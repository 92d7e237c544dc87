//! Theme generation interface consumed by the audit.
//!
//! A [`ThemeSource`] turns a [`Configuration`] into the four color sets a
//! theme document is built from. [`ForestNight`] is the table-driven source
//! shipped with this crate; tests substitute their own.

mod forest_night;
mod template;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::options::Configuration;

pub use forest_night::{ForestNight, LoadError, TABLE_FILES};
pub use template::{Context, Placeholder, Template, TemplateError};

/// Produces palettes and derived color sets for a configuration.
pub trait ThemeSource {
    /// Palette for the configuration's contrast level.
    fn palette(&self, configuration: &Configuration) -> Palette;

    /// Workbench color mapping, UI key to color reference.
    fn ui_colors(&self, palette: &Palette, configuration: &Configuration) -> UiColors;

    /// TextMate rules in emission order.
    fn syntax_rules(&self, palette: &Palette, configuration: &Configuration) -> Vec<SyntaxRule>;

    /// Semantic token overrides in emission order.
    fn semantic_rules(&self, palette: &Palette) -> SemanticRules;
}

/// Workbench UI key to color reference (`#rrggbb`, `#rrggbbaa`, ...).
pub type UiColors = BTreeMap<String, String>;

/// A TextMate scope rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxRule {
    pub name: String,
    pub scope: String,
    pub settings: SyntaxSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

/// Semantic token overrides, in emission order.
pub type SemanticRules = Vec<SemanticRule>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemanticRule {
    pub name: String,
    pub value: SemanticValue,
}

/// A semantic token override: either a color or a style without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SemanticValue {
    Color(String),
    Style {
        #[serde(rename = "fontStyle")]
        font_style: String,
    },
}

impl SemanticValue {
    /// The color reference, if this override sets one.
    pub fn color(&self) -> Option<&str> {
        match self {
            Self::Color(c) => Some(c),
            Self::Style { .. } => None,
        }
    }
}

/// Named color roles of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaletteRole {
    Bg0,
    Bg1,
    Bg,
    Bg2,
    Bg3,
    Bg4,
    Bg5,
    Grey0,
    Grey1,
    Grey2,
    Fg,
    Red,
    Orange,
    Yellow,
    Green,
    Aqua,
    Blue,
    Purple,
    DimRed,
    DimOrange,
    DimYellow,
    DimGreen,
    DimAqua,
    DimBlue,
    DimPurple,
    Shadow,
    Badge,
}

impl PaletteRole {
    pub const ALL: [Self; 27] = [
        Self::Bg0,
        Self::Bg1,
        Self::Bg,
        Self::Bg2,
        Self::Bg3,
        Self::Bg4,
        Self::Bg5,
        Self::Grey0,
        Self::Grey1,
        Self::Grey2,
        Self::Fg,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Aqua,
        Self::Blue,
        Self::Purple,
        Self::DimRed,
        Self::DimOrange,
        Self::DimYellow,
        Self::DimGreen,
        Self::DimAqua,
        Self::DimBlue,
        Self::DimPurple,
        Self::Shadow,
        Self::Badge,
    ];

    /// Name used in palette tables and templates.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bg0 => "bg0",
            Self::Bg1 => "bg1",
            Self::Bg => "bg",
            Self::Bg2 => "bg2",
            Self::Bg3 => "bg3",
            Self::Bg4 => "bg4",
            Self::Bg5 => "bg5",
            Self::Grey0 => "grey0",
            Self::Grey1 => "grey1",
            Self::Grey2 => "grey2",
            Self::Fg => "fg",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::DimRed => "dimRed",
            Self::DimOrange => "dimOrange",
            Self::DimYellow => "dimYellow",
            Self::DimGreen => "dimGreen",
            Self::DimAqua => "dimAqua",
            Self::DimBlue => "dimBlue",
            Self::DimPurple => "dimPurple",
            Self::Shadow => "shadow",
            Self::Badge => "badge",
        }
    }

    /// Look a role up by its table name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Roles that change with the contrast level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackgroundRoles {
    pub bg0: String,
    pub bg1: String,
    pub bg: String,
    pub bg2: String,
    pub bg3: String,
    pub bg4: String,
    pub bg5: String,
}

/// Roles shared by every contrast level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ForegroundRoles {
    pub grey0: String,
    pub grey1: String,
    pub grey2: String,
    pub fg: String,
    pub red: String,
    pub orange: String,
    pub yellow: String,
    pub green: String,
    pub aqua: String,
    pub blue: String,
    pub purple: String,
    pub dim_red: String,
    pub dim_orange: String,
    pub dim_yellow: String,
    pub dim_green: String,
    pub dim_aqua: String,
    pub dim_blue: String,
    pub dim_purple: String,
    pub shadow: String,
    pub badge: String,
}

/// A complete palette: one background set plus the shared foreground set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: BackgroundRoles,
    pub foreground: ForegroundRoles,
}

impl Palette {
    /// Color reference held by `role`.
    pub fn get(&self, role: PaletteRole) -> &str {
        let bg = &self.background;
        let fg = &self.foreground;
        match role {
            PaletteRole::Bg0 => &bg.bg0,
            PaletteRole::Bg1 => &bg.bg1,
            PaletteRole::Bg => &bg.bg,
            PaletteRole::Bg2 => &bg.bg2,
            PaletteRole::Bg3 => &bg.bg3,
            PaletteRole::Bg4 => &bg.bg4,
            PaletteRole::Bg5 => &bg.bg5,
            PaletteRole::Grey0 => &fg.grey0,
            PaletteRole::Grey1 => &fg.grey1,
            PaletteRole::Grey2 => &fg.grey2,
            PaletteRole::Fg => &fg.fg,
            PaletteRole::Red => &fg.red,
            PaletteRole::Orange => &fg.orange,
            PaletteRole::Yellow => &fg.yellow,
            PaletteRole::Green => &fg.green,
            PaletteRole::Aqua => &fg.aqua,
            PaletteRole::Blue => &fg.blue,
            PaletteRole::Purple => &fg.purple,
            PaletteRole::DimRed => &fg.dim_red,
            PaletteRole::DimOrange => &fg.dim_orange,
            PaletteRole::DimYellow => &fg.dim_yellow,
            PaletteRole::DimGreen => &fg.dim_green,
            PaletteRole::DimAqua => &fg.dim_aqua,
            PaletteRole::DimBlue => &fg.dim_blue,
            PaletteRole::DimPurple => &fg.dim_purple,
            PaletteRole::Shadow => &fg.shadow,
            PaletteRole::Badge => &fg.badge,
        }
    }
}
