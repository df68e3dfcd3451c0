//! Per-frame integration of the scroll value.
//!
//! While idle, each frame runs exactly one of three motion modes, picked in priority order:
//!
//! 1. [`IdleMode::Elastic`]: the value is out of bounds and movement is elastic; a critically
//!    damped spring pulls it back.
//! 2. [`IdleMode::Inertial`]: inertia is on; velocity decays geometrically and moves the value.
//! 3. [`IdleMode::Halt`]: velocity is dropped.
//!
//! Snapping runs afterwards and only once velocity has settled to zero, so it never competes
//! with either spring or inertia for the same motion.

use crate::options::ScrollOptions;
use crate::state::CarouselState;
use crate::types::MovementType;

/// Velocities below this magnitude (radians per second) are treated as rest.
pub const STOP_VELOCITY: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleMode {
    Elastic,
    Inertial,
    Halt,
}

impl IdleMode {
    pub fn select(options: &ScrollOptions, bounds_offset: f32) -> Self {
        if bounds_offset != 0.0 && options.movement_type == MovementType::Elastic {
            Self::Elastic
        } else if options.inertia {
            Self::Inertial
        } else {
            Self::Halt
        }
    }
}

/// What a single [`step`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepOutcome {
    /// The idle mode that ran, if the value was in motion or out of bounds.
    pub mode: Option<IdleMode>,
    /// The idle mode changed `value`.
    pub moved: bool,
    /// The snap spring changed `value`.
    pub snapped: bool,
}

impl StepOutcome {
    pub fn changed(&self) -> bool {
        self.moved || self.snapped
    }
}

/// Signed distance that brings `value + delta` back into `[0, total_arc]`.
///
/// Always `0` for [`MovementType::Unrestricted`].
pub fn bounds_offset(value: f32, delta: f32, total_arc: f32, movement: MovementType) -> f32 {
    if movement == MovementType::Unrestricted {
        return 0.0;
    }
    let value = value + delta;
    if value < 0.0 {
        -value
    } else if value > total_arc {
        total_arc - value
    } else {
        0.0
    }
}

/// Critically damped spring towards `target`.
///
/// `smooth_time` is roughly the time to reach the target; `velocity` is carried between calls.
/// The result never passes `target`. A non-positive `delta_time` leaves everything untouched.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> f32 {
    if delta_time <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * delta_time;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp(-max_change, max_change);
    let shifted_target = current - change;

    let temp = (*velocity + omega * change) * delta_time;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = shifted_target + (change + temp) * exp;

    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

/// Advances the state by one frame.
///
/// Does nothing but clear the wheel flag while a drag is in progress.
///
/// On the frame where velocity drops below [`STOP_VELOCITY`] and is zeroed, the value computed
/// for that frame is still committed. An elastic return therefore always lands inside the bounds
/// rather than stopping one frame short of them.
pub fn step(state: &mut CarouselState, options: &ScrollOptions, delta_time: f32) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    if state.is_dragging() {
        state.did_scroll = false;
        return outcome;
    }

    let movement = options.movement_type;
    let offset = bounds_offset(state.value, 0.0, state.total_arc, movement);
    if offset != 0.0 || state.velocity != 0.0 {
        let mode = IdleMode::select(options, offset);
        let mut value = state.value;
        match mode {
            IdleMode::Elastic => {
                let mut speed = state.velocity;
                value = smooth_damp(
                    value,
                    value + offset,
                    &mut speed,
                    options.elasticity,
                    f32::INFINITY,
                    delta_time,
                );
                state.velocity = speed;
            }
            IdleMode::Inertial => {
                state.velocity *= options.deceleration_rate.powf(delta_time);
                value += state.velocity * delta_time;
                if movement == MovementType::Clamped {
                    value += bounds_offset(value, 0.0, state.total_arc, movement);
                }
            }
            IdleMode::Halt => state.velocity = 0.0,
        }

        if state.velocity.abs() < STOP_VELOCITY {
            state.velocity = 0.0;
        } else if movement == MovementType::Clamped {
            value += bounds_offset(value, 0.0, state.total_arc, movement);
        }

        if value != state.value {
            state.value = value;
            outcome.moved = true;
        }
        outcome.mode = Some(mode);
    }

    if options.snap_to_nearest && state.velocity == 0.0 && !state.did_scroll {
        outcome.snapped = snap(state, options.snap_elasticity, delta_time);
    }

    state.did_scroll = false;
    outcome
}

fn snap(state: &mut CarouselState, snap_elasticity: f32, delta_time: f32) -> bool {
    if state.nearest.offset_from(state.value) == 0.0 {
        return false;
    }
    let Some(target) = state.nearest.theta() else {
        return false;
    };
    ctrace!(
        value = state.value,
        target,
        nearest = ?state.nearest.index(),
        "snap"
    );
    let value = smooth_damp(
        state.value,
        target,
        &mut state.snap_velocity,
        snap_elasticity,
        f32::INFINITY,
        delta_time,
    );
    let changed = value != state.value;
    state.value = value;
    changed
}
