// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Indicator styles and the per-style layer visibility table.

use core::fmt;
use core::str::FromStr;

use dotline_port::Rgba;
use thiserror::Error;

/// Visual style of the indicator row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Style {
    /// A solid highlight slides over static dots.
    Scroll,
    /// Dots are outlined; the current one fills in with a thick stroke.
    Fill,
    /// A single highlight stretches across the gap while moving between pages.
    #[default]
    Snake,
    /// Dots grow and take the active color as progress approaches them.
    Scale,
}

impl Style {
    /// All styles, in declaration order.
    pub const ALL: [Self; 4] = [Self::Scroll, Self::Fill, Self::Snake, Self::Scale];

    /// Lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Fill => "fill",
            Self::Snake => "snake",
            Self::Scale => "scale",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown style name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style `{0}` (expected scroll, fill, snake or scale)")]
pub struct ParseStyleError(pub String);

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}

/// Progress-independent layer attributes for a style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    /// Opacity of the active indicator (0 or 1).
    pub active_opacity: f32,
    /// Fill applied to every dot.
    pub dot_fill: Option<Rgba>,
    /// Stroke applied to every dot.
    pub dot_stroke: Option<Rgba>,
    /// Whether dot transforms return to identity.
    pub reset_dot_scale: bool,
}

/// Resolves which layers are shown, and in what color, for `style`.
///
/// | style  | active | dot fill | dot stroke |
/// |--------|--------|----------|------------|
/// | fill   | hidden | none     | inactive   |
/// | scroll | shown  | inactive | none       |
/// | scale  | hidden | inactive | none       |
/// | snake  | shown  | inactive | none       |
///
/// Every style resets dot transforms.
pub fn resolve_visibility(style: Style, inactive: Rgba) -> Visibility {
    let (active_opacity, dot_fill, dot_stroke) = match style {
        Style::Fill => (0.0, None, Some(inactive)),
        Style::Scroll | Style::Snake => (1.0, Some(inactive), None),
        Style::Scale => (0.0, Some(inactive), None),
    };
    Visibility {
        active_opacity,
        dot_fill,
        dot_stroke,
        reset_dot_scale: true,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::unwrap_used)]
    use super::*;

    #[test]
    fn table_matches_styles() {
        let inactive = Rgba::WHITE.with_alpha(0.3);
        let fill = resolve_visibility(Style::Fill, inactive);
        assert_eq!(fill.active_opacity, 0.0);
        assert_eq!(fill.dot_fill, None);
        assert_eq!(fill.dot_stroke, Some(inactive));

        for style in [Style::Scroll, Style::Snake] {
            let v = resolve_visibility(style, inactive);
            assert_eq!(v.active_opacity, 1.0);
            assert_eq!(v.dot_fill, Some(inactive));
            assert_eq!(v.dot_stroke, None);
        }

        let scale = resolve_visibility(Style::Scale, inactive);
        assert_eq!(scale.active_opacity, 0.0);
        assert_eq!(scale.dot_fill, Some(inactive));
        assert!(Style::ALL
            .iter()
            .all(|s| resolve_visibility(*s, inactive).reset_dot_scale));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Snake".parse::<Style>().unwrap(), Style::Snake);
        assert_eq!(" fill ".parse::<Style>().unwrap(), Style::Fill);
        assert!("wobble".parse::<Style>().is_err());
        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Style::Scale).unwrap();
        assert_eq!(json, "\"scale\"");
    }
}
