// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometry value types shared by the engine and render targets.
//!
//! All values are `f32` in the host's point space, with the origin at the
//! top-left of the indicator row and `y` growing downwards.

/// Z position of per-page dot layers.
pub const DOT_Z: f32 = 1.0;

/// Z position of the active indicator layer (drawn above the dots).
pub const ACTIVE_Z: f32 = 2.0;

/// A point in the indicator row's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either extent is zero (or negative).
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle.
///
/// Invariants:
/// - `size` components are non-negative when built through [`Rect::inset`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from origin and size.
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    /// Horizontal center.
    pub fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// Vertical center.
    pub fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the
    /// top and bottom, keeping it centered.
    ///
    /// When an inset exceeds half the extent, that extent collapses to zero
    /// around the original center rather than going negative.
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        let width = (self.size.width - 2.0 * dx).max(0.0);
        let height = (self.size.height - 2.0 * dy).max(0.0);
        Self {
            origin: Point::new(self.mid_x() - width / 2.0, self.mid_y() - height / 2.0),
            size: Size::new(width, height),
        }
    }
}

/// Rounded-rectangle path used for every indicator shape.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundedRect {
    /// Bounds of the path in the layer's local coordinates.
    pub rect: Rect,
    /// Corner radius; `min(width, height) / 2` yields a pill or circle.
    pub corner_radius: f32,
}

impl RoundedRect {
    /// Fully rounded path filling `rect`.
    pub fn pill(rect: Rect) -> Self {
        Self {
            rect,
            corner_radius: rect.size.width.min(rect.size.height) / 2.0,
        }
    }
}

/// Uniform 2D scale applied about the layer's center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Scale factor on both axes.
    pub scale: f32,
}

impl Transform {
    /// No scaling.
    pub const IDENTITY: Self = Self { scale: 1.0 };

    /// Uniform scale about the center.
    pub const fn scale(scale: f32) -> Self {
        Self { scale }
    }

    /// Returns `true` when this transform leaves geometry unchanged.
    pub fn is_identity(&self) -> bool {
        (self.scale - 1.0).abs() <= f32::EPSILON
    }

    /// Maps `rect` through the transform (scale about the rect's center).
    pub fn apply(&self, rect: &Rect) -> Rect {
        let size = Size::new(rect.size.width * self.scale, rect.size.height * self.scale);
        Rect::new(
            Point::new(rect.mid_x() - size.width / 2.0, rect.mid_y() - size.height / 2.0),
            size,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Identifies one drawable layer owned by a page control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerId {
    /// The single moving highlight used by the scroll and snake styles.
    Active,
    /// The static indicator for the page at this index.
    Dot(usize),
}
