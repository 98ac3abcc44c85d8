// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Render-target port contract for dotline page indicators.
//!
//! This crate defines the contract between the indicator engine and the
//! drawable surface that hosts it. It contains NO mapping logic; that lives
//! in dotline-core.
//!
//! # Design Principles
//!
//! - **Targets are dumb**: They receive attribute updates and apply them. No domain logic.
//! - **No time ownership**: Updates apply immediately; implicit transitions are the adapter's to disable.
//! - **Exclusive layers**: One active indicator plus one layer per page, owned by a single control.
//!
//! # Crate Features
//!
//! - `std` (default): Enables std library. Disable for no_std contexts.

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod color;
mod port;
mod types;

pub use color::{Color, ColorError, Rgba};
pub use port::RenderTarget;
pub use types::{LayerId, Point, Rect, RoundedRect, Size, Transform, ACTIVE_Z, DOT_Z};
