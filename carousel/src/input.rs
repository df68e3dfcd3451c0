use crate::angle::angular_half_width;
use crate::carousel::Carousel;
use crate::state::{CarouselState, Phase};

/// Entry points a host binds its pointer and wheel events to.
///
/// Deltas are linear distances along the arrangement axis (e.g. pixels); they are converted to
/// angles with the same chord mapping used for item extents. Drag callbacks also take the frame's
/// `delta_time` in seconds, which turns the angular delta into a velocity.
pub trait ScrollInput {
    /// A wheel notch. Moves the value immediately, kills velocity and suppresses snapping for
    /// the rest of the frame.
    fn on_scroll(&mut self, delta_y: f32);

    /// A pointer went down and may turn into a drag. Stops any ongoing motion.
    fn on_potential_drag_begin(&mut self);

    fn on_drag_begin(&mut self, delta_y: f32, delta_time: f32);

    fn on_drag(&mut self, delta_y: f32, delta_time: f32);

    /// The last drag frame. Its velocity becomes the throw velocity.
    fn on_drag_end(&mut self, delta_y: f32, delta_time: f32);
}

/// Applies a wheel delta. Returns `false` for a zero delta.
pub fn apply_wheel(state: &mut CarouselState, delta_y: f32, sensitivity: f32, radius: f32) -> bool {
    if delta_y == 0.0 {
        return false;
    }
    state.value += angular_half_width(-delta_y * sensitivity, radius);
    state.velocity = 0.0;
    state.did_scroll = true;
    true
}

/// Applies one drag frame. Velocity is overwritten with this frame's angular speed.
pub fn apply_drag(state: &mut CarouselState, delta_y: f32, delta_time: f32, radius: f32) {
    let delta = angular_half_width(delta_y, radius);
    state.value += delta;
    state.velocity = if delta_time > 0.0 {
        delta / delta_time
    } else {
        0.0
    };
}

impl ScrollInput for Carousel {
    fn on_scroll(&mut self, delta_y: f32) {
        if !self.enabled() {
            return;
        }
        let radius = self.radius();
        let sensitivity = self.options().scroll.scroll_sensitivity;
        if apply_wheel(self.state_mut(), delta_y, sensitivity, radius) {
            self.mark_dirty();
        }
    }

    fn on_potential_drag_begin(&mut self) {
        if !self.enabled() {
            return;
        }
        let state = self.state_mut();
        state.velocity = 0.0;
        state.snap_velocity = 0.0;
    }

    fn on_drag_begin(&mut self, delta_y: f32, delta_time: f32) {
        if !self.enabled() {
            return;
        }
        cdebug!(value = self.value(), "drag begin");
        self.state_mut().phase = Phase::Dragging;
        self.drag(delta_y, delta_time);
    }

    fn on_drag(&mut self, delta_y: f32, delta_time: f32) {
        if !self.enabled() {
            return;
        }
        self.drag(delta_y, delta_time);
    }

    fn on_drag_end(&mut self, delta_y: f32, delta_time: f32) {
        if !self.enabled() {
            return;
        }
        self.drag(delta_y, delta_time);
        let state = self.state_mut();
        state.phase = Phase::Idle;
        state.snap_velocity = 0.0;
        cdebug!(
            value = state.value,
            throw_velocity = state.velocity,
            "drag end"
        );
    }
}

impl Carousel {
    fn drag(&mut self, delta_y: f32, delta_time: f32) {
        let radius = self.radius();
        apply_drag(self.state_mut(), delta_y, delta_time, radius);
        self.mark_dirty();
    }
}
