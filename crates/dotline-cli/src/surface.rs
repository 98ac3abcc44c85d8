// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text render target: draws the indicator row as one line of glyphs.
//!
//! One column per point. Each column samples the topmost painted layer at
//! its center and picks a glyph from a density ramp by the paint's weight
//! (luminance times alpha times layer opacity).

use std::collections::BTreeMap;

use dotline_core::{LayerId, Rect, RenderTarget, Rgba, RoundedRect, Size, Transform, ACTIVE_Z};

const RAMP: &[u8] = b" .:-=+*#%@";

#[derive(Clone, Copy, Debug)]
struct Layer {
    z: f32,
    frame: Rect,
    path: RoundedRect,
    fill: Option<Rgba>,
    stroke: Option<Rgba>,
    line_width: f32,
    transform: Transform,
    opacity: f32,
}

impl Layer {
    fn new(z: f32) -> Self {
        Self {
            z,
            frame: Rect::default(),
            path: RoundedRect::default(),
            fill: None,
            stroke: None,
            line_width: 1.0,
            transform: Transform::IDENTITY,
            opacity: 1.0,
        }
    }

    /// Paint weight at horizontal position `x`, if the layer covers it.
    fn weight_at(&self, x: f32) -> Option<f32> {
        if self.opacity <= 0.0 {
            return None;
        }
        let frame = self.transform.apply(&self.frame);
        let scale = self.transform.scale;
        // path in row coordinates, through the layer transform
        let left = frame.origin.x + self.path.rect.origin.x * scale;
        let right = left + self.path.rect.size.width * scale;
        let half_stroke = if self.stroke.is_some() {
            self.line_width * scale / 2.0
        } else {
            0.0
        };
        if x <= left - half_stroke || x >= right + half_stroke {
            return None;
        }
        let fill = self.fill.map(weight);
        let stroke = self.stroke.map(|c| {
            let short = self.frame.size.width.min(self.frame.size.height);
            let coverage = if short > 0.0 {
                (self.line_width * 2.0 / short).min(1.0)
            } else {
                0.0
            };
            weight(c) * coverage
        });
        let paint = match (fill, stroke) {
            (Some(f), Some(s)) => f.max(s),
            (Some(w), None) | (None, Some(w)) => w,
            (None, None) => return None,
        };
        Some(paint * self.opacity)
    }
}

fn weight(c: Rgba) -> f32 {
    let luma = 0.2126 * c.r() + 0.7152 * c.g() + 0.0722 * c.b();
    luma * c.a()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn glyph(weight: f32) -> char {
    let last = RAMP.len() - 1;
    let index = ((weight.clamp(0.0, 1.0) * 9.0).round() as usize).min(last);
    char::from(RAMP[index])
}

/// Text-backed render target.
#[derive(Debug, Clone)]
pub struct TextSurface {
    layers: BTreeMap<LayerId, Layer>,
    size: Size,
}

impl Default for TextSurface {
    fn default() -> Self {
        let mut layers = BTreeMap::new();
        layers.insert(LayerId::Active, Layer::new(ACTIVE_Z));
        Self {
            layers,
            size: Size::ZERO,
        }
    }
}

impl TextSurface {
    /// Draws the row; wide enough for the intrinsic size and any overhang.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn rasterize(&self) -> String {
        let extent = self
            .layers
            .values()
            .filter(|l| l.opacity > 0.0)
            .map(|l| {
                let f = l.transform.apply(&l.frame);
                f.origin.x + f.size.width
            })
            .fold(self.size.width, f32::max);
        let columns = extent.max(0.0).ceil() as usize;

        let mut ordered: Vec<&Layer> = self.layers.values().collect();
        ordered.sort_by(|a, b| b.z.total_cmp(&a.z));

        (0..columns)
            .map(|col| {
                let x = col as f32 + 0.5;
                ordered
                    .iter()
                    .find_map(|l| l.weight_at(x))
                    .map_or(' ', glyph)
            })
            .collect()
    }

    fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(&id)
    }
}

impl RenderTarget for TextSurface {
    fn insert_dot(&mut self, index: usize, z_position: f32) {
        self.layers.insert(LayerId::Dot(index), Layer::new(z_position));
    }

    fn remove_dot(&mut self, index: usize) {
        self.layers.remove(&LayerId::Dot(index));
    }

    fn set_frame(&mut self, layer: LayerId, frame: Rect) {
        if let Some(l) = self.layer_mut(layer) {
            l.frame = frame;
        }
    }

    fn set_path(&mut self, layer: LayerId, path: RoundedRect) {
        if let Some(l) = self.layer_mut(layer) {
            l.path = path;
        }
    }

    fn set_fill_color(&mut self, layer: LayerId, color: Option<Rgba>) {
        if let Some(l) = self.layer_mut(layer) {
            l.fill = color;
        }
    }

    fn set_stroke_color(&mut self, layer: LayerId, color: Option<Rgba>) {
        if let Some(l) = self.layer_mut(layer) {
            l.stroke = color;
        }
    }

    fn set_line_width(&mut self, layer: LayerId, width: f32) {
        if let Some(l) = self.layer_mut(layer) {
            l.line_width = width;
        }
    }

    fn set_transform(&mut self, layer: LayerId, transform: Transform) {
        if let Some(l) = self.layer_mut(layer) {
            l.transform = transform;
        }
    }

    fn set_opacity(&mut self, layer: LayerId, opacity: f32) {
        if let Some(l) = self.layer_mut(layer) {
            l.opacity = opacity;
        }
    }

    fn invalidate_intrinsic_size(&mut self, size: Size) {
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotline_core::{Configuration, PageControl, Style};

    fn row(style: Style, progress: f32) -> String {
        let config = Configuration {
            number_of_pages: 3,
            indicator_width: 2.0,
            indicator_height: 2.0,
            indicator_padding: 2.0,
            active_color: Rgba::WHITE,
            inactive_color: Rgba::WHITE.with_alpha(0.3),
            style,
        };
        let mut control = PageControl::with_config(TextSurface::default(), config);
        control.set_progress(progress);
        control.target().rasterize()
    }

    #[test]
    fn scroll_highlights_the_current_slot() {
        assert_eq!(row(Style::Scroll, 1.0), "--  @@  --");
    }

    #[test]
    fn scale_grows_the_current_dot() {
        assert_eq!(row(Style::Scale, 0.0), "@@  --  --");
    }

    #[test]
    fn empty_surface_draws_nothing() {
        let control = PageControl::new(TextSurface::default());
        assert_eq!(control.target().rasterize(), "");
    }
}
