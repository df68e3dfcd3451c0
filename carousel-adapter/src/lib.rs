//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on geometry, physics and state. This crate
//! provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - A [`Controller`] that turns millisecond timestamps into the `delta_time` values the core
//!   expects, for ticks and drag events alike
//! - Tween-based programmatic scrolling to an item (optional; host-driven)
//! - Item anchoring, to keep the same item centred when the item set changes
//!
//! This crate is intentionally framework-agnostic (no bindings to any UI toolkit).
#![forbid(unsafe_code)]

mod anchor;
mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{ItemAnchor, apply_anchor, capture_nearest_anchor};
pub use controller::{Controller, DEFAULT_DELTA_TIME, MAX_DELTA_TIME};
pub use tween::{Easing, Tween};
