// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::float_cmp, clippy::cast_precision_loss)]
//! Property tests for the mapping engine.

use dotline_core::{
    accepts, interpolate, layout, render, Configuration, Rgba, Style, Transform,
};
use proptest::prelude::*;

fn any_rgba() -> impl Strategy<Value = Rgba> {
    (0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0)
        .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
}

fn any_style() -> impl Strategy<Value = Style> {
    prop::sample::select(Style::ALL.to_vec())
}

fn any_config() -> impl Strategy<Value = Configuration> {
    (
        1usize..12,
        1.0f32..40.0,
        1.0f32..40.0,
        0.0f32..30.0,
        any_rgba(),
        any_rgba(),
        any_style(),
    )
        .prop_map(|(pages, w, h, p, active, inactive, style)| Configuration {
            number_of_pages: pages,
            indicator_width: w,
            indicator_height: h,
            indicator_padding: p,
            active_color: active,
            inactive_color: inactive,
            style,
        })
}

proptest! {
    #[test]
    fn interpolation_stays_in_unit_range(
        a in any_rgba(),
        b in any_rgba(),
        t in -2.0f32..3.0,
    ) {
        let c = interpolate(a, b, t);
        for ch in c.to_array() {
            prop_assert!((0.0..=1.0).contains(&ch));
        }
        prop_assert_eq!(interpolate(a, b, 0.0), a);
        prop_assert_eq!(interpolate(a, b, 1.0), b);
    }

    #[test]
    fn layout_is_deterministic(config in any_config()) {
        let first = layout(&config);
        let _unrelated = layout(&Configuration { number_of_pages: 1, ..config });
        prop_assert_eq!(layout(&config), first);
    }

    #[test]
    fn scale_rests_on_the_current_page(config in any_config(), pick in 0usize..12) {
        let k = pick % config.number_of_pages;
        let config = Configuration { style: Style::Scale, ..config };
        let state = render(&config, Some(k as f32));
        for (i, dot) in state.dots.iter().enumerate() {
            if i == k {
                prop_assert_eq!(dot.fill_color, Some(config.active_color));
                prop_assert_eq!(dot.transform, Transform::scale(1.5));
            } else {
                prop_assert_eq!(dot.fill_color, Some(config.inactive_color));
                prop_assert_eq!(dot.transform, Transform::IDENTITY);
            }
        }
    }

    #[test]
    fn snake_stays_centered_and_bounded(config in any_config(), t in 0.0f32..1.0) {
        let config = Configuration { style: Style::Snake, ..config };
        let progress = t * (config.number_of_pages as f32 - 1.0);
        prop_assume!(accepts(progress, config.number_of_pages));
        let state = render(&config, Some(progress));
        let w = config.indicator_width;
        let frame = state.active.frame;
        prop_assert!(frame.size.width >= w * 0.9999);
        prop_assert!(frame.size.width <= w * 1.6001);
        let center = progress * config.stride() + w / 2.0;
        prop_assert!((frame.mid_x() - center).abs() <= 1e-3 * center.max(1.0));
        prop_assert_eq!(frame.size.height, config.indicator_height);
    }

    #[test]
    fn fill_stroke_stays_inside_the_cell(config in any_config(), t in 0.0f32..1.0) {
        let config = Configuration { style: Style::Fill, ..config };
        let progress = t * (config.number_of_pages as f32 - 1.0);
        prop_assume!(accepts(progress, config.number_of_pages));
        let state = render(&config, Some(progress));
        let short = config.indicator_width.min(config.indicator_height);
        for dot in &state.dots {
            prop_assert!(dot.line_width >= 1.0);
            prop_assert!(dot.line_width <= (short / 2.0).max(1.0) + 1e-4);
            prop_assert!(dot.path.rect.size.width >= 0.0);
            prop_assert!(dot.path.rect.size.height >= 0.0);
            prop_assert!(dot.fill_color.is_none());
        }
    }

    #[test]
    fn rejected_progress_renders_base_state(config in any_config(), below in 0.2f32..5.0) {
        let progress = -below;
        prop_assert!(!accepts(progress, config.number_of_pages));
        prop_assert_eq!(render(&config, Some(progress)), render(&config, None));
    }
}
