//! WCAG 2.x color math on hex color references.
//!
//! Channels are kept on the 0-255 scale as `f64` so that blended colors keep
//! their fractional values until luminance is computed.

use std::fmt;

use palette::Srgb;

/// Luminance coefficients for sRGB (WCAG 2.x).
const COEF_R: f64 = 0.2126;
const COEF_G: f64 = 0.7152;
const COEF_B: f64 = 0.0722;

/// Linear segment cutoff of the sRGB transfer function as written in WCAG 2.x.
const LINEAR_CUTOFF: f64 = 0.03928;

/// Flare term added to both luminances in the contrast ratio.
const FLARE: f64 = 0.05;

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel, 0.0-255.0
    pub r: f64,
    /// Green channel, 0.0-255.0
    pub g: f64,
    /// Blue channel, 0.0-255.0
    pub b: f64,
    /// Alpha, 0.0-1.0
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::opaque(255.0, 255.0, 255.0);
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a fully opaque color.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Whether the color fully covers whatever is beneath it.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Round to 8-bit sRGB, dropping alpha.
    pub fn to_srgb(&self) -> Srgb<u8> {
        let channel = |c: f64| c.round().clamp(0.0, 255.0) as u8;
        Srgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl From<Srgb<u8>> for Rgba {
    fn from(color: Srgb<u8>) -> Self {
        Self::opaque(color.red as f64, color.green as f64, color.blue as f64)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb = self.to_srgb();
        write!(f, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", (self.a * 255.0).round() as u8)?;
        }
        Ok(())
    }
}

/// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` color reference.
///
/// Hex digits are case-insensitive. Shorthand digits are doubled (`#abc` is
/// `#aabbcc`). Without alpha digits the color is opaque; otherwise alpha is
/// the last byte divided by 255. Every other shape yields `None`.
///
/// ```
/// use forest_night::color::parse_color;
///
/// let color = parse_color("#a7c08080").unwrap();
/// assert_eq!(color.g, 192.0);
/// assert_eq!(color.a, 128.0 / 255.0);
///
/// assert!(parse_color("a7c080").is_none());
/// ```
pub fn parse_color(reference: &str) -> Option<Rgba> {
    let digits = reference.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    let (r, g, b, a) = match digits.len() {
        3 => {
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            (r * 17, g * 17, b * 17, 255)
        }
        6 => (byte(0)?, byte(2)?, byte(4)?, 255),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };

    Some(Rgba {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64 / 255.0,
    })
}

/// Composite `fg` over `bg` ("source-over").
///
/// When both colors are fully transparent the result is transparent black.
pub fn blend(fg: Rgba, bg: Rgba) -> Rgba {
    let alpha = fg.a + bg.a * (1.0 - fg.a);
    if alpha == 0.0 {
        return Rgba::TRANSPARENT;
    }

    let channel = |f: f64, b: f64| (f * fg.a + b * bg.a * (1.0 - fg.a)) / alpha;
    Rgba {
        r: channel(fg.r, bg.r),
        g: channel(fg.g, bg.g),
        b: channel(fg.b, bg.b),
        a: alpha,
    }
}

/// Convert one 0-255 channel to linear light.
fn to_linear(channel: f64) -> f64 {
    let c = channel / 255.0;
    if c <= LINEAR_CUTOFF {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance, 0.0 (black) to 1.0 (white).
///
/// Alpha is ignored; resolve translucent colors against their backdrop first.
pub fn relative_luminance(color: Rgba) -> f64 {
    COEF_R * to_linear(color.r) + COEF_G * to_linear(color.g) + COEF_B * to_linear(color.b)
}

/// WCAG contrast ratio between two opaque colors, 1.0 to 21.0.
///
/// Symmetric in its arguments.
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + FLARE) / (darker + FLARE)
}
