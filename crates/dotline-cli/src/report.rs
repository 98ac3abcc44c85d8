// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame reports and their table/JSON/text renderings.

use comfy_table::Table;
use dotline_core::{IndicatorRenderState, RenderState, Transform};
use serde::Serialize;

/// Serializable view of one layer.
#[derive(Debug, Clone, Serialize)]
pub struct LayerReport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub line_width: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl From<&IndicatorRenderState> for LayerReport {
    fn from(s: &IndicatorRenderState) -> Self {
        Self {
            x: s.origin().x,
            y: s.origin().y,
            width: s.size().width,
            height: s.size().height,
            corner_radius: s.corner_radius(),
            fill: s.fill_color.map(|c| c.to_string()),
            stroke: s.stroke_color.map(|c| c.to_string()),
            line_width: s.line_width,
            scale: s.scale(),
            opacity: s.opacity,
        }
    }
}

/// One frame of a sweep.
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub step: usize,
    pub progress: f32,
    pub current_page: usize,
    pub active: LayerReport,
    pub dots: Vec<LayerReport>,
    #[serde(skip)]
    pub row: String,
}

impl FrameReport {
    pub fn new(
        step: usize,
        progress: f32,
        current_page: usize,
        state: &RenderState,
        row: String,
    ) -> Self {
        Self {
            step,
            progress,
            current_page,
            active: LayerReport::from(&state.active),
            dots: state.dots.iter().map(LayerReport::from).collect(),
            row,
        }
    }
}

fn paint(layer: &LayerReport) -> String {
    match (&layer.fill, &layer.stroke) {
        (Some(fill), None) => fill.clone(),
        (None, Some(stroke)) => format!("{stroke} w{:.2}", layer.line_width),
        (Some(fill), Some(stroke)) => format!("{fill}/{stroke}"),
        (None, None) => "-".to_string(),
    }
}

fn describe_dot(dot: &LayerReport) -> String {
    if Transform::scale(dot.scale).is_identity() {
        paint(dot)
    } else {
        format!("{} x{:.2}", paint(dot), dot.scale)
    }
}

pub fn table(frames: &[FrameReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["step", "progress", "page", "active", "dots"]);
    for frame in frames {
        let active = if frame.active.opacity > 0.0 {
            format!(
                "x={:.2} w={:.2} {}",
                frame.active.x,
                frame.active.width,
                paint(&frame.active)
            )
        } else {
            "hidden".to_string()
        };
        let dots = frame
            .dots
            .iter()
            .map(describe_dot)
            .collect::<Vec<_>>()
            .join("  ");
        table.add_row(vec![
            frame.step.to_string(),
            format!("{:.3}", frame.progress),
            frame.current_page.to_string(),
            active,
            dots,
        ]);
    }
    table
}

pub fn ascii(frames: &[FrameReport]) -> String {
    frames
        .iter()
        .map(|f| format!("{:>8.3} |{}|\n", f.progress, f.row))
        .collect()
}
