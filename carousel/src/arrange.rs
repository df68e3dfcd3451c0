//! Arc stepping and pose composition.

use glam::{Affine3A, Vec3};

use crate::types::ItemPose;

/// Walks along the arc, centring one item at a time.
///
/// The first item sits exactly at `-value`. Every later item is pushed forward by half its own
/// width, and after each item the cursor advances by the other half plus the spacing angle, so
/// the gap between two centres is `w0 / 2 + spacing + w1 / 2`.
#[derive(Clone, Copy, Debug)]
pub struct ArcStepper {
    value: f32,
    cursor: f32,
    spacing: f32,
    placed: usize,
}

impl ArcStepper {
    pub fn new(value: f32, spacing_angle: f32) -> Self {
        Self {
            value,
            cursor: -value,
            spacing: spacing_angle,
            placed: 0,
        }
    }

    /// Centres the next item and returns its angle relative to the scroll value.
    pub fn place(&mut self, angular_width: f32) -> f32 {
        let half = angular_width * 0.5;
        if self.placed > 0 {
            self.cursor += half;
        }
        let centre = self.cursor;
        self.cursor += half + self.spacing;
        self.placed += 1;
        centre
    }

    /// Converts an angle returned by [`Self::place`] into an absolute angular position.
    pub fn absolute(&self, relative: f32) -> f32 {
        relative + self.value
    }

    /// Running angle (relative to the scroll value) where the next item would start.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn placed(&self) -> usize {
        self.placed
    }
}

/// Turns relative angles into world poses around the container.
#[derive(Clone, Copy, Debug)]
pub struct PoseCompositor {
    radius: f32,
    direction: f32,
    control_rotation: bool,
    container: Affine3A,
}

impl PoseCompositor {
    pub fn new(radius: f32, invert: bool, control_rotation: bool, container: Affine3A) -> Self {
        Self {
            radius,
            direction: if invert { 1.0 } else { -1.0 },
            control_rotation,
            container,
        }
    }

    /// Pivots the item about the lateral axis through the cylinder centre, which sits `radius`
    /// in front of the container.
    pub fn compose(&self, relative_theta: f32) -> ItemPose {
        let pivot = Vec3::Z * self.radius;
        let local = Affine3A::from_translation(pivot)
            * Affine3A::from_rotation_x(relative_theta * self.direction)
            * Affine3A::from_translation(-pivot);
        let world = self.container * local;
        let (_, rotation, translation) = world.to_scale_rotation_translation();
        ItemPose {
            translation,
            rotation: self.control_rotation.then_some(rotation),
        }
    }
}
