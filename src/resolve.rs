//! Resolution of color references to the color actually rendered.

use std::fmt;

use crate::color::{Rgba, blend, parse_color};

/// A color reference that is not `#rgb`, `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColor(pub String);

impl InvalidColor {
    /// The offending reference.
    pub fn reference(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed color reference '{}'", self.0)
    }
}

impl std::error::Error for InvalidColor {}

/// Parse a surface's base color.
///
/// Any grammatical reference is accepted, translucent ones included. A
/// translucent base yields translucent composites; contrast is then taken on
/// their color channels.
pub fn parse_base(reference: &str) -> Result<Rgba, InvalidColor> {
    parse_color(reference).ok_or_else(|| InvalidColor(reference.into()))
}

/// Resolve `reference` to the color rendered on top of `base`.
///
/// Opaque references are returned unchanged. Translucent ones are composited
/// over `base`, so the result is opaque whenever `base` is. For layered
/// surfaces resolve the background over its declared base first, then the
/// foreground over the resolved background.
pub fn resolve_opaque(reference: &str, base: Rgba) -> Result<Rgba, InvalidColor> {
    let color = parse_color(reference).ok_or_else(|| InvalidColor(reference.into()))?;
    if color.is_opaque() {
        Ok(color)
    } else {
        Ok(blend(color, base))
    }
}
