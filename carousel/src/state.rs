use crate::nearest::NearestItemTracker;

/// Whether the host currently owns the scroll value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Physics drives the value.
    #[default]
    Idle,
    /// A drag gesture is in progress; physics is suspended.
    Dragging,
}

/// The single mutable state of a carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselState {
    /// Scroll position in radians. Unbounded.
    pub value: f32,
    /// Radians per second.
    pub velocity: f32,
    /// Damped velocity used by the snap spring only.
    pub snap_velocity: f32,
    /// Upper scroll bound, rebuilt by every layout pass.
    pub total_arc: f32,
    pub nearest: NearestItemTracker,
    pub phase: Phase,
    /// A wheel event happened this frame; suppresses snapping until the frame ends.
    pub did_scroll: bool,
}

impl CarouselState {
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }
}

/// A lightweight, serializable snapshot of the scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSnapshot {
    pub value: f32,
    pub velocity: f32,
}
