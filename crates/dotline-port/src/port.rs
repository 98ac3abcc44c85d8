// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Render target trait defining the drawable-surface contract.

use crate::{LayerId, Rect, Rgba, RoundedRect, Size, Transform};

/// Drawable surface driven by a page control.
///
/// Implementors own the platform primitives (shape layers, GPU quads, terminal
/// cells) and apply attribute updates. No mapping logic.
///
/// # Design
///
/// This trait is a hexagonal port. The engine computes render states; the
/// adapter implements this trait to draw them.
///
/// # Immediacy
///
/// Every setter must take effect immediately. Platforms that animate
/// attribute changes implicitly must suppress that animation inside the
/// adapter; progress is already continuous when it reaches the engine.
///
/// # Layers
///
/// `LayerId::Active` exists for the lifetime of the target. Dot layers are
/// created with [`RenderTarget::insert_dot`] and destroyed with
/// [`RenderTarget::remove_dot`]; the engine always inserts at the next
/// trailing index and removes from the end.
pub trait RenderTarget {
    /// Create the dot layer for page `index` at the given z position.
    fn insert_dot(&mut self, index: usize, z_position: f32);

    /// Destroy the dot layer for page `index`.
    fn remove_dot(&mut self, index: usize);

    /// Set the frame (position and size) of a layer.
    fn set_frame(&mut self, layer: LayerId, frame: Rect);

    /// Set the shape path drawn inside a layer, in layer-local coordinates.
    fn set_path(&mut self, layer: LayerId, path: RoundedRect);

    /// Set the fill color; `None` leaves the shape unfilled.
    fn set_fill_color(&mut self, layer: LayerId, color: Option<Rgba>);

    /// Set the stroke color; `None` disables the stroke.
    fn set_stroke_color(&mut self, layer: LayerId, color: Option<Rgba>);

    /// Set the stroke width.
    fn set_line_width(&mut self, layer: LayerId, width: f32);

    /// Set the layer transform (scale about the layer's center).
    fn set_transform(&mut self, layer: LayerId, transform: Transform);

    /// Set the layer opacity in `[0, 1]`.
    fn set_opacity(&mut self, layer: LayerId, opacity: f32);

    /// The control's natural size changed; hosts re-run their layout.
    fn invalidate_intrinsic_size(&mut self, size: Size);
}
