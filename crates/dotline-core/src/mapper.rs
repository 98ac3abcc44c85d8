// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Style-specific mapping from progress to layer attributes.
//!
//! Every style is driven by `delta = |index - progress|`, the distance in
//! pages between a dot and the current position:
//!
//! - **fill**: the stroke of dots within one page thickens toward a solid
//!   dot and blends to the active color.
//! - **scroll**: the active indicator slides to `progress * stride`.
//! - **scale**: dots within one page grow up to 1.5x and blend to the active
//!   color.
//! - **snake**: the active indicator widens by up to 60% mid-transit,
//!   staying centered on the progress point.

use dotline_port::{Point, Rect, RoundedRect, Size, Transform};
use tracing::debug;

use crate::color::approach_color;
use crate::config::Configuration;
use crate::layout::Layout;
use crate::state::RenderState;
use crate::style::Style;

/// Lowest progress (exclusive) the mapper acts on.
pub const PROGRESS_FLOOR: f32 = -0.2;

/// Distance below the page count (exclusive) of the highest accepted progress.
pub const PROGRESS_CEILING_INSET: f32 = 0.8;

/// Extra scale a dot reaches when progress rests on it.
pub const MAX_SCALE_GAIN: f32 = 0.5;

/// Extra width, per page of distance from the nearest page, for the snake.
pub const SNAKE_STRETCH: f32 = 1.2;

/// Whether `progress` is in the range the mapper acts on for `pages` pages.
///
/// The accepted range is `(-0.2, pages - 0.8)`; NaN is never accepted.
#[allow(clippy::cast_precision_loss)]
pub fn accepts(progress: f32, pages: usize) -> bool {
    progress > PROGRESS_FLOOR && progress < pages as f32 - PROGRESS_CEILING_INSET
}

/// Overlays the progress mapping for `config.style` onto `state`.
///
/// `state` must already hold the base state for `config` and `layout`.
/// Returns `false` and leaves `state` untouched when the guard rejects
/// `progress`.
pub fn map_progress(
    progress: f32,
    config: &Configuration,
    layout: &Layout,
    state: &mut RenderState,
) -> bool {
    if !accepts(progress, config.number_of_pages) {
        debug!(progress, pages = config.number_of_pages, "progress out of range; ignored");
        return false;
    }
    match config.style {
        Style::Fill => map_fill(progress, config, state),
        Style::Scroll => map_scroll(progress, config, layout, state),
        Style::Scale => map_scale(progress, config, state),
        Style::Snake => map_snake(progress, config, layout, state),
    }
    true
}

#[allow(clippy::cast_precision_loss)]
fn map_fill(progress: f32, config: &Configuration, state: &mut RenderState) {
    let size = config.dot_size();
    let max_line_width = (size.width.min(size.height) / 2.0 - 1.0).max(0.0);
    for (index, dot) in state.dots.iter_mut().enumerate() {
        let index = index as f32;
        let delta = (index - progress).abs();
        if delta < 1.0 {
            dot.line_width = 1.0 + max_line_width * (1.0 - delta);
            dot.stroke_color = Some(approach_color(
                config.active_color,
                config.inactive_color,
                index,
                progress,
                delta,
            ));
        } else {
            dot.line_width = 1.0;
            dot.stroke_color = Some(config.inactive_color);
        }
        // inset by the full stroke width on every side, centered in the cell
        let inset = dot.line_width;
        dot.path = RoundedRect::pill(Rect::from_size(dot.frame.size).inset(inset, inset));
    }
}

fn map_scroll(progress: f32, config: &Configuration, layout: &Layout, state: &mut RenderState) {
    state.active.frame = Rect::new(
        Point::new(progress * config.stride(), 0.0),
        layout.active_base_size,
    );
}

#[allow(clippy::cast_precision_loss)]
fn map_scale(progress: f32, config: &Configuration, state: &mut RenderState) {
    for (index, dot) in state.dots.iter_mut().enumerate() {
        let index = index as f32;
        let delta = (index - progress).abs();
        if delta < 1.0 {
            dot.fill_color = Some(approach_color(
                config.active_color,
                config.inactive_color,
                index,
                progress,
                delta,
            ));
            dot.transform = Transform::scale(1.0 + MAX_SCALE_GAIN * (1.0 - delta));
        } else {
            dot.fill_color = Some(config.inactive_color);
            dot.transform = Transform::IDENTITY;
        }
    }
}

fn map_snake(progress: f32, config: &Configuration, layout: &Layout, state: &mut RenderState) {
    let base = layout.active_base_size;
    let distance_from_page = (progress.round() - progress).abs();
    let width = base.width * (1.0 + distance_from_page * SNAKE_STRETCH);
    let center_x = progress * config.stride() + base.width / 2.0;
    let size = Size::new(width, base.height);
    state.active.frame = Rect::new(Point::new(center_x - width / 2.0, 0.0), size);
    state.active.path = RoundedRect {
        rect: Rect::from_size(size),
        corner_radius: layout.corner_radius,
    };
}
