// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mock render target for headless testing of page controls.
//!
//! MockTarget tracks layer attributes in a BTreeMap and logs every call,
//! without drawing anything. Use it to verify reconciliation and diffing.

use std::collections::BTreeMap;

use dotline_port::{
    LayerId, Rect, RenderTarget, Rgba, RoundedRect, Size, Transform, ACTIVE_Z,
};

/// Attributes last applied to one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerRecord {
    /// Z position the layer was created with.
    pub z_position: f32,
    /// Frame.
    pub frame: Rect,
    /// Shape path.
    pub path: RoundedRect,
    /// Fill color.
    pub fill_color: Option<Rgba>,
    /// Stroke color.
    pub stroke_color: Option<Rgba>,
    /// Stroke width.
    pub line_width: f32,
    /// Transform.
    pub transform: Transform,
    /// Opacity.
    pub opacity: f32,
}

impl LayerRecord {
    fn new(z_position: f32) -> Self {
        Self {
            z_position,
            frame: Rect::default(),
            path: RoundedRect::default(),
            fill_color: None,
            stroke_color: None,
            line_width: 1.0,
            transform: Transform::IDENTITY,
            opacity: 1.0,
        }
    }
}

/// One call received by the mock, in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TargetCall {
    /// `insert_dot(index, z)`.
    InsertDot(usize),
    /// `remove_dot(index)`.
    RemoveDot(usize),
    /// `set_frame`.
    Frame(LayerId),
    /// `set_path`.
    Path(LayerId),
    /// `set_fill_color`.
    Fill(LayerId),
    /// `set_stroke_color`.
    Stroke(LayerId),
    /// `set_line_width`.
    LineWidth(LayerId),
    /// `set_transform`.
    Transform(LayerId),
    /// `set_opacity`.
    Opacity(LayerId),
    /// `invalidate_intrinsic_size`.
    IntrinsicSize(Size),
}

impl TargetCall {
    /// Layer the call touched, if any.
    pub const fn layer(&self) -> Option<LayerId> {
        match self {
            Self::InsertDot(i) | Self::RemoveDot(i) => Some(LayerId::Dot(*i)),
            Self::Frame(id)
            | Self::Path(id)
            | Self::Fill(id)
            | Self::Stroke(id)
            | Self::LineWidth(id)
            | Self::Transform(id)
            | Self::Opacity(id) => Some(*id),
            Self::IntrinsicSize(_) => None,
        }
    }
}

/// Mock render target.
///
/// Implements `RenderTarget` by recording attributes per layer. Updates to a
/// dot that was never inserted are logged but otherwise dropped, and
/// counted in [`MockTarget::orphan_updates`].
#[derive(Debug, Clone)]
pub struct MockTarget {
    /// Current layers, including the always-present active layer.
    pub layers: BTreeMap<LayerId, LayerRecord>,
    /// Every call, in arrival order.
    pub calls: Vec<TargetCall>,
    /// Most recent intrinsic size reported.
    pub intrinsic_size: Option<Size>,
    /// Attribute updates addressed to layers that do not exist.
    pub orphan_updates: usize,
}

impl Default for MockTarget {
    fn default() -> Self {
        let mut layers = BTreeMap::new();
        layers.insert(LayerId::Active, LayerRecord::new(ACTIVE_Z));
        Self {
            layers,
            calls: Vec::new(),
            intrinsic_size: None,
            orphan_updates: 0,
        }
    }
}

impl MockTarget {
    /// Create a mock with only the active layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of dot layers.
    pub fn dot_count(&self) -> usize {
        self.layers
            .keys()
            .filter(|id| matches!(id, LayerId::Dot(_)))
            .count()
    }

    /// Attributes of a layer.
    pub fn layer(&self, id: LayerId) -> Option<&LayerRecord> {
        self.layers.get(&id)
    }

    /// Forget logged calls (attributes are kept).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Logged calls that touched `id`.
    pub fn calls_for(&self, id: LayerId) -> Vec<TargetCall> {
        self.calls
            .iter()
            .filter(|c| c.layer() == Some(id))
            .copied()
            .collect()
    }

    fn record(&mut self, call: TargetCall, layer: LayerId, f: impl FnOnce(&mut LayerRecord)) {
        self.calls.push(call);
        match self.layers.get_mut(&layer) {
            Some(record) => f(record),
            None => self.orphan_updates += 1,
        }
    }
}

impl RenderTarget for MockTarget {
    fn insert_dot(&mut self, index: usize, z_position: f32) {
        self.calls.push(TargetCall::InsertDot(index));
        self.layers
            .insert(LayerId::Dot(index), LayerRecord::new(z_position));
    }

    fn remove_dot(&mut self, index: usize) {
        self.calls.push(TargetCall::RemoveDot(index));
        self.layers.remove(&LayerId::Dot(index));
    }

    fn set_frame(&mut self, layer: LayerId, frame: Rect) {
        self.record(TargetCall::Frame(layer), layer, |r| r.frame = frame);
    }

    fn set_path(&mut self, layer: LayerId, path: RoundedRect) {
        self.record(TargetCall::Path(layer), layer, |r| r.path = path);
    }

    fn set_fill_color(&mut self, layer: LayerId, color: Option<Rgba>) {
        self.record(TargetCall::Fill(layer), layer, |r| r.fill_color = color);
    }

    fn set_stroke_color(&mut self, layer: LayerId, color: Option<Rgba>) {
        self.record(TargetCall::Stroke(layer), layer, |r| r.stroke_color = color);
    }

    fn set_line_width(&mut self, layer: LayerId, width: f32) {
        self.record(TargetCall::LineWidth(layer), layer, |r| r.line_width = width);
    }

    fn set_transform(&mut self, layer: LayerId, transform: Transform) {
        self.record(TargetCall::Transform(layer), layer, |r| {
            r.transform = transform;
        });
    }

    fn set_opacity(&mut self, layer: LayerId, opacity: f32) {
        self.record(TargetCall::Opacity(layer), layer, |r| r.opacity = opacity);
    }

    fn invalidate_intrinsic_size(&mut self, size: Size) {
        self.calls.push(TargetCall::IntrinsicSize(size));
        self.intrinsic_size = Some(size);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::unwrap_used)]
    use super::*;
    use dotline_port::{Point, DOT_Z};

    #[test]
    fn tracks_inserted_layers() {
        let mut m = MockTarget::new();
        m.insert_dot(0, DOT_Z);
        m.insert_dot(1, DOT_Z);
        assert_eq!(m.dot_count(), 2);
        m.set_frame(LayerId::Dot(1), Rect::new(Point::new(3.0, 0.0), Size::new(1.0, 1.0)));
        assert_eq!(m.layer(LayerId::Dot(1)).unwrap().frame.origin.x, 3.0);
        m.remove_dot(1);
        assert_eq!(m.dot_count(), 1);
        assert_eq!(m.layer(LayerId::Active).unwrap().z_position, ACTIVE_Z);
    }

    #[test]
    fn updates_to_missing_layers_are_counted() {
        let mut m = MockTarget::new();
        m.set_opacity(LayerId::Dot(7), 0.5);
        assert_eq!(m.orphan_updates, 1);
        assert_eq!(m.calls, vec![TargetCall::Opacity(LayerId::Dot(7))]);
    }
}
