// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Indicator configuration snapshot.

use dotline_port::{Rgba, Size};

use crate::style::Style;

/// Inputs the engine recomputes from.
///
/// Owned by the host and passed by value; every field may change
/// independently. Dimensions are stored as given and clamped on use (see
/// [`Configuration::dot_size`] and [`Configuration::padding`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    /// Number of pages (one dot each).
    pub number_of_pages: usize,
    /// Dot width.
    pub indicator_width: f32,
    /// Dot height.
    pub indicator_height: f32,
    /// Horizontal gap between dots.
    pub indicator_padding: f32,
    /// Color of the current page.
    pub active_color: Rgba,
    /// Color of every other page.
    pub inactive_color: Rgba,
    /// Visual style.
    pub style: Style,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            number_of_pages: 0,
            indicator_width: 5.0,
            indicator_height: 5.0,
            indicator_padding: 10.0,
            active_color: Rgba::WHITE,
            inactive_color: Rgba::WHITE.with_alpha(0.3),
            style: Style::Snake,
        }
    }
}

fn non_negative(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.max(0.0)
    }
}

impl Configuration {
    /// Dot size with negative (or NaN) extents treated as zero.
    pub fn dot_size(&self) -> Size {
        Size::new(
            non_negative(self.indicator_width),
            non_negative(self.indicator_height),
        )
    }

    /// Padding treated as non-negative.
    pub fn padding(&self) -> f32 {
        non_negative(self.indicator_padding)
    }

    /// Distance from one dot's origin to the next.
    pub fn stride(&self) -> f32 {
        self.dot_size().width + self.padding()
    }
}
