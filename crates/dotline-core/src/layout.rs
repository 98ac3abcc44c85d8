// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rest-position geometry of the indicator row.

use dotline_port::{Point, Rect, Size};

use crate::config::Configuration;

/// Static geometry for one configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Frame of each dot, indexed by page.
    pub dot_frames: Vec<Rect>,
    /// Size of the active indicator at rest: one dot, or zero without pages.
    pub active_base_size: Size,
    /// Corner radius shared by every shape; always fully rounded.
    pub corner_radius: f32,
}

/// Computes dot frames for `config`.
///
/// Dot `i` sits at `x = i * (width + padding)`, `y = 0`, with the nominal dot
/// size. Pure: the same configuration always yields the same frames.
#[allow(clippy::cast_precision_loss)]
pub fn layout(config: &Configuration) -> Layout {
    let size = config.dot_size();
    let stride = config.stride();
    let dot_frames = (0..config.number_of_pages)
        .map(|i| Rect::new(Point::new(i as f32 * stride, 0.0), size))
        .collect();
    let active_base_size = if config.number_of_pages == 0 {
        Size::ZERO
    } else {
        size
    };
    Layout {
        dot_frames,
        active_base_size,
        corner_radius: size.width.min(size.height) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    fn config(pages: usize, width: f32, height: f32, padding: f32) -> Configuration {
        Configuration {
            number_of_pages: pages,
            indicator_width: width,
            indicator_height: height,
            indicator_padding: padding,
            ..Configuration::default()
        }
    }

    #[test]
    fn frames_step_by_width_plus_padding() {
        let l = layout(&config(3, 10.0, 5.0, 10.0));
        let xs: Vec<f32> = l.dot_frames.iter().map(|f| f.origin.x).collect();
        assert_eq!(xs, vec![0.0, 20.0, 40.0]);
        assert!(l.dot_frames.iter().all(|f| f.size == Size::new(10.0, 5.0)));
        assert_eq!(l.corner_radius, 2.5);
        assert_eq!(l.active_base_size, Size::new(10.0, 5.0));
    }

    #[test]
    fn negative_size_never_produces_negative_geometry() {
        let l = layout(&config(2, -3.0, 6.0, 4.0));
        assert_eq!(l.corner_radius, 0.0);
        assert_eq!(l.dot_frames[1].origin.x, 4.0);
        assert_eq!(l.dot_frames[1].size, Size::new(0.0, 6.0));
    }

    #[test]
    fn zero_pages_is_empty() {
        let l = layout(&config(0, 5.0, 5.0, 10.0));
        assert!(l.dot_frames.is_empty());
        assert_eq!(l.active_base_size, Size::ZERO);
    }
}
