// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! dotline-core: maps continuous page progress onto indicator render states.
//!
//! The engine is a set of pure functions composed in a fixed order:
//!
//! 1. [`style::resolve_visibility`] decides which layers show and how.
//! 2. [`layout::layout`] computes the rest geometry of every dot.
//! 3. [`mapper::map_progress`] overlays the style-specific progress mapping.
//!
//! [`render`] runs all three. [`PageControl`] owns a
//! [`RenderTarget`](dotline_port::RenderTarget), reconciles its dot layers and
//! pushes only the attributes that changed between frames.

pub mod color;
pub mod config;
pub mod control;
pub mod layout;
pub mod mapper;
mod mock_target;
pub mod size;
pub mod state;
pub mod style;

pub use color::interpolate;
pub use config::Configuration;
pub use control::PageControl;
pub use layout::{layout, Layout};
pub use mapper::{accepts, map_progress};
pub use mock_target::{LayerRecord, MockTarget, TargetCall};
pub use size::{intrinsic_size, size_that_fits};
pub use state::{render, ActiveIndicatorRenderState, IndicatorRenderState, RenderState};
pub use style::{resolve_visibility, ParseStyleError, Style, Visibility};

pub use dotline_port::{
    Color, ColorError, LayerId, Point, Rect, RenderTarget, Rgba, RoundedRect, Size, Transform,
    ACTIVE_Z, DOT_Z,
};
