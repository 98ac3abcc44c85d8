// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Render states and the stateless composition that produces them.

use dotline_port::{Point, Rect, Rgba, RoundedRect, Size, Transform};
use tracing::trace;

use crate::config::Configuration;
use crate::layout::{layout, Layout};
use crate::mapper::map_progress;
use crate::style::resolve_visibility;

/// Every visual attribute of one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorRenderState {
    /// Position and size within the row.
    pub frame: Rect,
    /// Shape drawn inside the frame, in layer-local coordinates.
    pub path: RoundedRect,
    /// Fill, if any.
    pub fill_color: Option<Rgba>,
    /// Stroke, if any.
    pub stroke_color: Option<Rgba>,
    /// Stroke width.
    pub line_width: f32,
    /// Scale about the frame's center.
    pub transform: Transform,
    /// Layer opacity.
    pub opacity: f32,
}

/// The moving highlight shares the dot shape.
pub type ActiveIndicatorRenderState = IndicatorRenderState;

impl IndicatorRenderState {
    /// Frame origin.
    pub const fn origin(&self) -> Point {
        self.frame.origin
    }

    /// Frame size.
    pub const fn size(&self) -> Size {
        self.frame.size
    }

    /// Corner radius of the path.
    pub const fn corner_radius(&self) -> f32 {
        self.path.corner_radius
    }

    /// Uniform scale factor.
    pub const fn scale(&self) -> f32 {
        self.transform.scale
    }

    /// Where the layer actually draws once its transform is applied.
    pub fn visual_frame(&self) -> Rect {
        self.transform.apply(&self.frame)
    }

    /// Layer resting in `frame`, drawing a path that fills it.
    pub(crate) fn at_rest(frame: Rect, corner_radius: f32) -> Self {
        Self {
            frame,
            path: RoundedRect {
                rect: Rect::from_size(frame.size),
                corner_radius,
            },
            fill_color: None,
            stroke_color: None,
            line_width: 1.0,
            transform: Transform::IDENTITY,
            opacity: 1.0,
        }
    }
}

/// Complete visual state of the indicator row.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    /// One entry per page.
    pub dots: Vec<IndicatorRenderState>,
    /// The moving highlight.
    pub active: ActiveIndicatorRenderState,
}

impl RenderState {
    /// Rest geometry plus the style's visibility rules, before any progress.
    pub fn base(config: &Configuration, layout: &Layout) -> Self {
        let visibility = resolve_visibility(config.style, config.inactive_color);
        let dots = layout
            .dot_frames
            .iter()
            .map(|frame| {
                let mut dot = IndicatorRenderState::at_rest(*frame, layout.corner_radius);
                dot.fill_color = visibility.dot_fill;
                dot.stroke_color = visibility.dot_stroke;
                if visibility.reset_dot_scale {
                    dot.transform = Transform::IDENTITY;
                }
                dot
            })
            .collect();
        let mut active = IndicatorRenderState::at_rest(
            Rect::from_size(layout.active_base_size),
            layout.corner_radius,
        );
        active.fill_color = Some(config.active_color);
        active.opacity = visibility.active_opacity;
        Self { dots, active }
    }
}

/// Computes the full render state for `config` at `progress`.
///
/// Runs the style visibility rules, then the layout, then the progress
/// mapping. `None` (or a progress the guard rejects) yields the base state
/// with no progress overlay.
pub fn render(config: &Configuration, progress: Option<f32>) -> RenderState {
    let layout = layout(config);
    let mut state = RenderState::base(config, &layout);
    if let Some(progress) = progress {
        let mapped = map_progress(progress, config, &layout, &mut state);
        trace!(progress, mapped, style = %config.style, "render");
    }
    state
}
