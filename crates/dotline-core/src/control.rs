// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Page control: owns a render target and keeps it in sync with its inputs.

use dotline_port::{Color, ColorError, LayerId, RenderTarget, Size, DOT_Z};
use tracing::debug;

use crate::config::Configuration;
use crate::mapper::accepts;
use crate::size::{intrinsic_size, size_that_fits};
use crate::state::{render, IndicatorRenderState, RenderState};
use crate::style::Style;

/// Paginated dot indicator bound to a [`RenderTarget`].
///
/// Every setter returns whether the value changed. A change synchronously
/// recomputes the render state, reconciles dot layers (appending or removing
/// trailing indices only) and forwards the attributes that differ from what
/// the target already shows. Setting a value equal to the current one does
/// nothing.
///
/// Progress outside `(-0.2, pages - 0.8)` is remembered but not drawn: the
/// last accepted progress keeps driving the progress-dependent attributes
/// until an accepted value arrives.
#[derive(Debug)]
pub struct PageControl<T> {
    target: T,
    config: Configuration,
    progress: f32,
    accepted: Option<f32>,
    applied: Option<RenderState>,
    intrinsic: Size,
}

impl<T: RenderTarget> PageControl<T> {
    /// Create a control with the default configuration and draw it.
    pub fn new(target: T) -> Self {
        Self::with_config(target, Configuration::default())
    }

    /// Create a control with `config` at progress 0 and draw it.
    pub fn with_config(target: T, config: Configuration) -> Self {
        let mut control = Self {
            target,
            config,
            progress: 0.0,
            accepted: None,
            applied: None,
            intrinsic: Size::ZERO,
        };
        control.refresh();
        control
    }

    /// The render target.
    pub const fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the render target.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Consume the control and return the target.
    pub fn into_inner(self) -> T {
        self.target
    }

    /// Current configuration snapshot.
    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    /// What the target currently shows.
    pub fn render_state(&self) -> Option<&RenderState> {
        self.applied.as_ref()
    }

    /// Number of pages.
    pub const fn number_of_pages(&self) -> usize {
        self.config.number_of_pages
    }

    /// Last progress set, accepted or not.
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Visual style.
    pub const fn style(&self) -> Style {
        self.config.style
    }

    /// `floor(progress)` clamped into `[0, pages - 1]`; 0 when there are no pages.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn current_page(&self) -> usize {
        let last = self.config.number_of_pages.saturating_sub(1);
        if self.progress.is_nan() || self.progress < 0.0 {
            return 0;
        }
        // saturating float-to-int cast
        (self.progress.floor() as usize).min(last)
    }

    /// Natural size of the row.
    pub fn intrinsic_size(&self) -> Size {
        intrinsic_size(&self.config)
    }

    /// Preferred size; ignores `constraint`.
    pub fn size_that_fits(&self, constraint: Size) -> Size {
        size_that_fits(&self.config, constraint)
    }

    /// Replace the whole configuration at once.
    pub fn set_configuration(&mut self, config: Configuration) -> bool {
        if config == self.config {
            return false;
        }
        self.config = config;
        self.refresh();
        true
    }

    /// Set the page count.
    pub fn set_number_of_pages(&mut self, pages: usize) -> bool {
        self.update(|c| &mut c.number_of_pages, pages)
    }

    /// Set the fractional page position.
    pub fn set_progress(&mut self, progress: f32) -> bool {
        if progress.to_bits() == self.progress.to_bits() {
            return false;
        }
        self.progress = progress;
        self.refresh();
        true
    }

    /// Jump to `page`; drops any fractional progress.
    #[allow(clippy::cast_precision_loss)]
    pub fn set_current_page(&mut self, page: usize) -> bool {
        self.set_progress(page as f32)
    }

    /// Set the visual style.
    pub fn set_style(&mut self, style: Style) -> bool {
        self.update(|c| &mut c.style, style)
    }

    /// Set the color of the current page.
    ///
    /// Fails without touching any state when `color` cannot be normalized.
    pub fn set_active_color(&mut self, color: impl Into<Color>) -> Result<bool, ColorError> {
        let rgba = color.into().to_rgba()?;
        Ok(self.update(|c| &mut c.active_color, rgba))
    }

    /// Set the color of the other pages.
    ///
    /// Fails without touching any state when `color` cannot be normalized.
    pub fn set_inactive_color(&mut self, color: impl Into<Color>) -> Result<bool, ColorError> {
        let rgba = color.into().to_rgba()?;
        Ok(self.update(|c| &mut c.inactive_color, rgba))
    }

    /// Set the gap between dots.
    pub fn set_indicator_padding(&mut self, padding: f32) -> bool {
        self.update_dimension(|c| &mut c.indicator_padding, padding)
    }

    /// Set the dot width.
    pub fn set_indicator_width(&mut self, width: f32) -> bool {
        self.update_dimension(|c| &mut c.indicator_width, width)
    }

    /// Set the dot height.
    pub fn set_indicator_height(&mut self, height: f32) -> bool {
        self.update_dimension(|c| &mut c.indicator_height, height)
    }

    fn update<V: PartialEq>(
        &mut self,
        field: impl FnOnce(&mut Configuration) -> &mut V,
        value: V,
    ) -> bool {
        let slot = field(&mut self.config);
        if *slot == value {
            return false;
        }
        *slot = value;
        self.refresh();
        true
    }

    fn update_dimension(
        &mut self,
        field: impl FnOnce(&mut Configuration) -> &mut f32,
        value: f32,
    ) -> bool {
        let slot = field(&mut self.config);
        if slot.to_bits() == value.to_bits() {
            return false;
        }
        *slot = value;
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        if accepts(self.progress, self.config.number_of_pages) {
            self.accepted = Some(self.progress);
        } else {
            debug!(
                progress = self.progress,
                pages = self.config.number_of_pages,
                retained = ?self.accepted,
                "progress out of range; keeping last accepted"
            );
        }
        let next = render(&self.config, self.accepted);
        self.apply(next);

        let size = intrinsic_size(&self.config);
        if size != self.intrinsic {
            debug!(width = size.width, height = size.height, "intrinsic size changed");
            self.intrinsic = size;
            self.target.invalidate_intrinsic_size(size);
        }
    }

    fn apply(&mut self, next: RenderState) {
        let previous = self.applied.take();
        let shown = previous.as_ref().map_or(0, |p| p.dots.len());
        let wanted = next.dots.len();
        if wanted > shown {
            debug!(from = shown, to = wanted, "adding dot layers");
            for index in shown..wanted {
                self.target.insert_dot(index, DOT_Z);
            }
        } else if wanted < shown {
            debug!(from = shown, to = wanted, "removing dot layers");
            for index in (wanted..shown).rev() {
                self.target.remove_dot(index);
            }
        }

        push_layer(
            &mut self.target,
            LayerId::Active,
            previous.as_ref().map(|p| &p.active),
            &next.active,
        );
        for (index, dot) in next.dots.iter().enumerate() {
            let before = previous.as_ref().and_then(|p| p.dots.get(index));
            push_layer(&mut self.target, LayerId::Dot(index), before, dot);
        }
        self.applied = Some(next);
    }
}

/// Forwards the attributes of `next` that differ from `prev` (all of them
/// when the layer is new).
fn push_layer<T: RenderTarget>(
    target: &mut T,
    id: LayerId,
    prev: Option<&IndicatorRenderState>,
    next: &IndicatorRenderState,
) {
    let changed = |same: fn(&IndicatorRenderState, &IndicatorRenderState) -> bool| {
        prev.is_none_or(|p| !same(p, next))
    };
    if changed(|a, b| a.opacity.to_bits() == b.opacity.to_bits()) {
        target.set_opacity(id, next.opacity);
    }
    if changed(|a, b| a.frame == b.frame) {
        target.set_frame(id, next.frame);
    }
    if changed(|a, b| a.path == b.path) {
        target.set_path(id, next.path);
    }
    if changed(|a, b| a.fill_color == b.fill_color) {
        target.set_fill_color(id, next.fill_color);
    }
    if changed(|a, b| a.stroke_color == b.stroke_color) {
        target.set_stroke_color(id, next.stroke_color);
    }
    if changed(|a, b| a.line_width.to_bits() == b.line_width.to_bits()) {
        target.set_line_width(id, next.line_width);
    }
    if changed(|a, b| a.transform == b.transform) {
        target.set_transform(id, next.transform);
    }
}

impl<T: RenderTarget + Default> Default for PageControl<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
