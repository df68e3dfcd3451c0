//! A headless cylindrical carousel engine.
//!
//! Items are laid out along the surface of a virtual cylinder: each item's linear extent is
//! turned into the angle it subtends (a chord on a circle whose radius derives from the container
//! height), and a single scalar scroll value rotates the whole arrangement. The value is driven
//! by drag and wheel input and, once released, by a per-frame integrator that combines an elastic
//! bounds spring, inertial decay and a snap-to-nearest-item spring.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - the container height (for the radius) and transform
//! - the ordered item extents, on every layout pass
//! - pointer/wheel deltas and the per-frame `delta_time`
//!
//! and to apply the poses and opacities each layout pass produces. For timestamp-driven frame
//! loops, tweens and anchoring, see the `carousel-adapter` crate.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod angle;
mod arrange;
mod carousel;
mod catalog;
mod error;
mod input;
mod nearest;
mod options;
mod physics;
mod state;
mod types;


pub use angle::{MIN_ITEM_EXTENT, angular_half_width, item_angular_width, opacity};
pub use arrange::{ArcStepper, PoseCompositor};
pub use carousel::Carousel;
pub use catalog::{CatalogEntry, ItemCatalog};
pub use error::{CarouselError, Result};
pub use input::{ScrollInput, apply_drag, apply_wheel};
pub use nearest::NearestItemTracker;
pub use options::{CarouselOptions, OnInvalidateCallback, PresentationOptions, ScrollOptions};
pub use physics::{IdleMode, STOP_VELOCITY, StepOutcome, bounds_offset, smooth_damp};
pub use state::{CarouselSnapshot, CarouselState, Phase};
pub use types::{Container, ItemDesc, ItemLayout, ItemPose, MovementType, PreviewSlot};

pub use glam;
