//! Colors as they flow through style functions.
//!
//! Channels are stored premultiplied by alpha, which is the representation
//! the renderer consumes and the one plain RGB interpolation blends in.

mod parse;
mod spaces;

use std::fmt;

pub use parse::{validate_hsla, validate_rgba};
pub use spaces::{ColorSpace, Hcl, HclColor, Lab, LabColor, SpaceConversion};

use crate::foundation::math::format_number;

/// RGBA color with premultiplied channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel premultiplied by alpha.
    pub r: f64,
    /// Green channel premultiplied by alpha.
    pub g: f64,
    /// Blue channel premultiplied by alpha.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Build a color from channels that are already premultiplied.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from straight (non-premultiplied) channels in `[0, 1]`.
    pub fn from_straight(r: f64, g: f64, b: f64, a: f64) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Parse a CSS color string (`#rgb[a]`, `#rrggbb[aa]`, `rgb[a]()`, `hsl[a]()`, named).
    ///
    /// Returns `None` for anything that is not a color.
    pub fn parse(input: &str) -> Option<Self> {
        parse::parse_css_color(input)
    }

    /// Straight-alpha `[r, g, b, a]`. Fully transparent colors come back as zeros.
    pub fn to_straight(self) -> [f64; 4] {
        if self.a == 0.0 {
            return [0.0, 0.0, 0.0, 0.0];
        }
        [self.r / self.a, self.g / self.a, self.b / self.a, self.a]
    }

    /// `rgba(r,g,b,a)` with premultiplied 0..255 channels.
    pub fn to_premultiplied_string(self) -> String {
        fn channel(c: f64) -> String {
            format_number((c.clamp(0.0, 1.0) * 255.0).round())
        }

        format!(
            "rgba({},{},{},{})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            format_number(self.a)
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_premultiplied_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/color.rs"]
mod tests;
