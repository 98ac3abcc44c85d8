// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Color inputs and the normalized RGBA form the engine works in.
//!
//! Hosts hand colors over in whatever space they hold them (grayscale,
//! extended-range sRGB, 8-bit, raw component lists). Everything is converted
//! to [`Rgba`] with channels clamped to `[0, 1]` before it reaches the engine.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Error raised when a [`Color`] cannot be normalized to RGBA.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Component list whose length maps to no known color space.
    #[error("unsupported color space with {0} components")]
    UnsupportedComponents(usize),
    /// A component was NaN or infinite.
    #[error("color components must be finite")]
    NonFinite,
    /// Hex string was not `#rgb`, `#rrggbb` or `#rrggbbaa`.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Normalized RGBA color; every channel lies in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

fn unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// Fully transparent black.
    pub const CLEAR: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Builds a color, clamping each channel into `[0, 1]` (NaN becomes 0).
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Red channel.
    pub const fn r(&self) -> f32 {
        self.r
    }

    /// Green channel.
    pub const fn g(&self) -> f32 {
        self.g
    }

    /// Blue channel.
    pub const fn b(&self) -> f32 {
        self.b
    }

    /// Alpha channel.
    pub const fn a(&self) -> f32 {
        self.a
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: unit(a), ..self }
    }

    /// Channels as `[r, g, b, a]`.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantizes to 8 bits per channel.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgba8(self) -> [u8; 4] {
        // channels are already in [0, 1]
        self.to_array().map(|c| (c * 255.0 + 0.5) as u8)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// A color as supplied by the host, in any supported space.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// sRGB components; values outside `[0, 1]` are extended range.
    Srgb {
        /// Red.
        r: f32,
        /// Green.
        g: f32,
        /// Blue.
        b: f32,
        /// Alpha.
        a: f32,
    },
    /// Grayscale with alpha.
    Gray {
        /// White level.
        white: f32,
        /// Alpha.
        alpha: f32,
    },
    /// 8-bit RGBA.
    Rgba8([u8; 4]),
    /// Raw components from a device color space (1 to 4 values).
    Components(Vec<f32>),
}

impl Color {
    /// Grayscale color.
    pub const fn gray(white: f32, alpha: f32) -> Self {
        Self::Gray { white, alpha }
    }

    /// Normalizes to clamped RGBA.
    pub fn to_rgba(&self) -> Result<Rgba, ColorError> {
        let [r, g, b, a] = match self {
            Self::Srgb { r, g, b, a } => [*r, *g, *b, *a],
            Self::Gray { white, alpha } => [*white, *white, *white, *alpha],
            Self::Rgba8(bytes) => (*bytes).map(|c| f32::from(c) / 255.0),
            Self::Components(c) => match c.as_slice() {
                [w] => [*w, *w, *w, 1.0],
                [w, a] => [*w, *w, *w, *a],
                [r, g, b] => [*r, *g, *b, 1.0],
                [r, g, b, a] => [*r, *g, *b, *a],
                other => return Err(ColorError::UnsupportedComponents(other.len())),
            },
        };
        if [r, g, b, a].iter().any(|c| !c.is_finite()) {
            return Err(ColorError::NonFinite);
        }
        Ok(Rgba::new(r, g, b, a))
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Self::Srgb {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl TryFrom<Color> for Rgba {
    type Error = ColorError;

    fn try_from(value: Color) -> Result<Self, Self::Error> {
        value.to_rgba()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let nibble = |i: usize| {
            u8::from_str_radix(&hex[i..=i], 16)
                .map(|n| n * 17)
                .map_err(|_| invalid())
        };
        let bytes = match hex.len() {
            3 => [nibble(0)?, nibble(1)?, nibble(2)?, 255],
            6 => [byte(0)?, byte(2)?, byte(4)?, 255],
            8 => [byte(0)?, byte(2)?, byte(4)?, byte(6)?],
            _ => return Err(invalid()),
        };
        Ok(Self::Rgba8(bytes))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::unwrap_used)]
    use super::*;
    use alloc::vec;
    use approx::assert_relative_eq;

    #[test]
    fn gray_expands_to_rgb() {
        let c = Color::gray(1.0, 0.3).to_rgba().unwrap();
        assert_eq!(c.to_array(), [1.0, 1.0, 1.0, 0.3]);
    }

    #[test]
    fn extended_range_is_clamped() {
        let c = Color::Srgb {
            r: 1.4,
            g: -0.2,
            b: 0.5,
            a: 2.0,
        }
        .to_rgba()
        .unwrap();
        assert_eq!(c.to_array(), [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn component_lists_by_arity() {
        let two = Color::Components(vec![0.5, 0.25]).to_rgba().unwrap();
        assert_eq!(two.to_array(), [0.5, 0.5, 0.5, 0.25]);
        let three = Color::Components(vec![0.1, 0.2, 0.3]).to_rgba().unwrap();
        assert_eq!(three.a(), 1.0);
        assert_eq!(
            Color::Components(vec![0.0; 5]).to_rgba(),
            Err(ColorError::UnsupportedComponents(5))
        );
        assert_eq!(
            Color::Components(vec![]).to_rgba(),
            Err(ColorError::UnsupportedComponents(0))
        );
    }

    #[test]
    fn non_finite_is_rejected() {
        assert_eq!(Color::gray(f32::NAN, 1.0).to_rgba(), Err(ColorError::NonFinite));
    }

    #[test]
    fn hex_forms() {
        let c: Color = "#ffffff4d".parse().unwrap();
        assert_relative_eq!(c.to_rgba().unwrap().a(), 77.0 / 255.0);
        let short: Color = "f80".parse().unwrap();
        assert_eq!(short, Color::Rgba8([255, 136, 0, 255]));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn display_round_trips_through_hex() {
        let c = Rgba::new(1.0, 0.0, 0.5, 1.0);
        let s = alloc::format!("{c}");
        assert_eq!(s, "#ff0080ff");
        let back = s.parse::<Color>().unwrap().to_rgba().unwrap();
        assert_relative_eq!(back.b(), 128.0 / 255.0);
    }
}
