//! Theme options a user can choose from.
//!
//! Every field of [`Configuration`] is drawn from a closed enumeration. The
//! defaults match what the editor falls back to when a setting is unset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::theme::PaletteRole;

/// Background contrast level of the palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    Hard,
    #[default]
    Medium,
    Soft,
}

impl Contrast {
    pub const ALL: [Self; 3] = [Self::Hard, Self::Medium, Self::Soft];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Medium => "medium",
            Self::Soft => "soft",
        }
    }
}

/// Contrast as configured, including "inherit the theme's default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastSetting {
    /// Use the contrast the theme ships with
    Theme,
    Hard,
    #[default]
    Medium,
    Soft,
}

impl ContrastSetting {
    /// The contrast level the theme ships with.
    pub const THEME_DEFAULT: Contrast = Contrast::Medium;

    /// The concrete contrast level this setting selects.
    pub fn level(self) -> Contrast {
        match self {
            Self::Theme => Self::THEME_DEFAULT,
            Self::Hard => Contrast::Hard,
            Self::Medium => Contrast::Medium,
            Self::Soft => Contrast::Soft,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Hard => "hard",
            Self::Medium => "medium",
            Self::Soft => "soft",
        }
    }
}

impl From<Contrast> for ContrastSetting {
    fn from(contrast: Contrast) -> Self {
        match contrast {
            Contrast::Hard => Self::Hard,
            Contrast::Medium => Self::Medium,
            Contrast::Soft => Self::Soft,
        }
    }
}

/// Workbench skin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Workbench {
    #[default]
    Material,
    Flat,
    HighContrast,
}

impl Workbench {
    pub const ALL: [Self; 3] = [Self::Material, Self::Flat, Self::HighContrast];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Flat => "flat",
            Self::HighContrast => "high-contrast",
        }
    }
}

/// The seven accent hues shared by selection and cursor options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Red,
    Orange,
    Yellow,
    Green,
    Aqua,
    Blue,
    Purple,
}

impl Accent {
    /// Palette role holding the accent itself.
    pub fn role(self) -> PaletteRole {
        match self {
            Self::Red => PaletteRole::Red,
            Self::Orange => PaletteRole::Orange,
            Self::Yellow => PaletteRole::Yellow,
            Self::Green => PaletteRole::Green,
            Self::Aqua => PaletteRole::Aqua,
            Self::Blue => PaletteRole::Blue,
            Self::Purple => PaletteRole::Purple,
        }
    }

    /// Palette role holding the darkened background variant.
    pub fn dim_role(self) -> PaletteRole {
        match self {
            Self::Red => PaletteRole::DimRed,
            Self::Orange => PaletteRole::DimOrange,
            Self::Yellow => PaletteRole::DimYellow,
            Self::Green => PaletteRole::DimGreen,
            Self::Aqua => PaletteRole::DimAqua,
            Self::Blue => PaletteRole::DimBlue,
            Self::Purple => PaletteRole::DimPurple,
        }
    }
}

/// Selection highlight color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    #[default]
    Grey,
    Red,
    Orange,
    Yellow,
    Green,
    Aqua,
    Blue,
    Purple,
}

impl Selection {
    pub const ALL: [Self; 8] = [
        Self::Grey,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Aqua,
        Self::Blue,
        Self::Purple,
    ];

    /// Accent hue, or `None` for the neutral grey selection.
    pub fn accent(self) -> Option<Accent> {
        match self {
            Self::Grey => None,
            Self::Red => Some(Accent::Red),
            Self::Orange => Some(Accent::Orange),
            Self::Yellow => Some(Accent::Yellow),
            Self::Green => Some(Accent::Green),
            Self::Aqua => Some(Accent::Aqua),
            Self::Blue => Some(Accent::Blue),
            Self::Purple => Some(Accent::Purple),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grey => "grey",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }
}

/// Cursor color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Aqua,
    Blue,
    Purple,
}

impl Cursor {
    pub const ALL: [Self; 8] = [
        Self::White,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Aqua,
        Self::Blue,
        Self::Purple,
    ];

    /// Accent hue, or `None` for the foreground-colored white cursor.
    pub fn accent(self) -> Option<Accent> {
        match self {
            Self::White => None,
            Self::Red => Some(Accent::Red),
            Self::Orange => Some(Accent::Orange),
            Self::Yellow => Some(Accent::Yellow),
            Self::Green => Some(Accent::Green),
            Self::Aqua => Some(Accent::Aqua),
            Self::Blue => Some(Accent::Blue),
            Self::Purple => Some(Accent::Purple),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }
}

/// Opacity of the background tint behind diagnostic text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticOpacity {
    #[default]
    #[serde(rename = "0%")]
    None,
    #[serde(rename = "12.5%")]
    Eighth,
    #[serde(rename = "25%")]
    Quarter,
    #[serde(rename = "37.5%")]
    ThreeEighths,
    #[serde(rename = "50%")]
    Half,
}

impl DiagnosticOpacity {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Eighth,
        Self::Quarter,
        Self::ThreeEighths,
        Self::Half,
    ];

    /// Two hex digits appended to a color to apply this opacity.
    pub fn alpha_suffix(self) -> &'static str {
        match self {
            Self::None => "00",
            Self::Eighth => "20",
            Self::Quarter => "40",
            Self::ThreeEighths => "60",
            Self::Half => "80",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "0%",
            Self::Eighth => "12.5%",
            Self::Quarter => "25%",
            Self::ThreeEighths => "37.5%",
            Self::Half => "50%",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    Contrast,
    ContrastSetting,
    Workbench,
    Selection,
    Cursor,
    DiagnosticOpacity
);

/// One combination of theme options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    pub contrast: ContrastSetting,
    pub workbench: Workbench,
    pub selection: Selection,
    pub cursor: Cursor,
    pub diagnostic_text_background_opacity: DiagnosticOpacity,
    pub italic_keywords: bool,
    pub italic_comments: bool,
    pub high_contrast: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            contrast: ContrastSetting::Medium,
            workbench: Workbench::Material,
            selection: Selection::Grey,
            cursor: Cursor::White,
            diagnostic_text_background_opacity: DiagnosticOpacity::None,
            italic_keywords: false,
            italic_comments: true,
            high_contrast: false,
        }
    }
}

impl Configuration {
    /// One-line summary of the options the audit varies.
    pub fn summary(&self) -> String {
        format!(
            "contrast={} workbench={} selection={} cursor={} diag={} highContrast={}",
            self.contrast,
            self.workbench,
            self.selection,
            self.cursor,
            self.diagnostic_text_background_opacity,
            self.high_contrast
        )
    }
}
