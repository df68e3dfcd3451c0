use std::sync::Arc;

use crate::carousel::Carousel;
use crate::error::{CarouselError, Result};
use crate::types::MovementType;

/// A callback fired whenever the carousel needs a new layout pass.
///
/// This is where a host hooks its own layout-invalidation / rebuild scheduling.
pub type OnInvalidateCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// How items are placed and presented on the cylinder.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PresentationOptions {
    /// Linear gap between neighbouring items (converted to an angle like any other extent).
    pub spacing: f32,
    /// Multiplier applied to half the container height to obtain the radius.
    pub radius_scale: f32,
    /// Rotate items the other way around the lateral axis.
    pub invert: bool,
    /// Lay out the host's items last-to-first.
    pub reverse_arrangement: bool,
    /// Fraction of the half circle over which opacity fades out. Must lie in `[0, 1]`.
    pub blend_area: f32,
    /// Emit a per-item opacity.
    pub alpha: bool,
    /// Emit a per-item rotation. When off, only translations are produced.
    pub control_child_rotation: bool,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            radius_scale: 1.0,
            invert: false,
            reverse_arrangement: false,
            blend_area: 1.0,
            alpha: false,
            control_child_rotation: true,
        }
    }
}

/// Kinetic behaviour of the scroll value.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollOptions {
    pub movement_type: MovementType,
    /// Smoothing time (seconds) of the spring that pulls an out-of-bounds value back.
    pub elasticity: f32,
    /// Keep moving after a drag ends.
    pub inertia: bool,
    /// Fraction of velocity retained after one second of free motion.
    pub deceleration_rate: f32,
    /// Linear distance scrolled per wheel notch.
    pub scroll_sensitivity: f32,
    /// Pull the value onto the nearest item once it comes to rest.
    pub snap_to_nearest: bool,
    /// Smoothing time (seconds) of the snap spring.
    pub snap_elasticity: f32,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            movement_type: MovementType::Elastic,
            elasticity: 0.1,
            inertia: true,
            deceleration_rate: 0.135,
            scroll_sensitivity: 5.0,
            snap_to_nearest: true,
            snap_elasticity: 0.1,
        }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so hosts can tweak a field and hand the
/// result back through `Carousel::set_options`.
pub struct CarouselOptions {
    pub presentation: PresentationOptions,
    pub scroll: ScrollOptions,

    /// Inactive carousels ignore input and ticks and never request layout.
    pub enabled: bool,

    /// Optional callback fired when the carousel marks its layout dirty.
    pub on_invalidate: Option<OnInvalidateCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            presentation: self.presentation,
            scroll: self.scroll,
            enabled: self.enabled,
            on_invalidate: self.on_invalidate.clone(),
        }
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self {
            presentation: PresentationOptions::default(),
            scroll: ScrollOptions::default(),
            enabled: true,
            on_invalidate: None,
        }
    }

    /// Checks every numeric option. The container height is validated separately, see
    /// [`Self::radius_for`].
    pub fn validate(&self) -> Result<()> {
        let p = &self.presentation;
        let s = &self.scroll;

        if !(p.radius_scale.is_finite() && p.radius_scale > 0.0) {
            return Err(CarouselError::InvalidOption {
                name: "radius_scale",
                value: p.radius_scale,
            });
        }
        if !(0.0..=1.0).contains(&p.blend_area) {
            return Err(CarouselError::BlendAreaOutOfRange(p.blend_area));
        }
        if !p.spacing.is_finite() {
            return Err(CarouselError::InvalidOption {
                name: "spacing",
                value: p.spacing,
            });
        }
        non_negative("elasticity", s.elasticity)?;
        non_negative("deceleration_rate", s.deceleration_rate)?;
        non_negative("scroll_sensitivity", s.scroll_sensitivity)?;
        non_negative("snap_elasticity", s.snap_elasticity)?;
        Ok(())
    }

    /// Derives the cylinder radius for a container of the given height.
    ///
    /// Fails when the result is not a positive finite number.
    pub fn radius_for(&self, container_height: f32) -> Result<f32> {
        let scale = self.presentation.radius_scale;
        let radius = container_height * scale * 0.5;
        if radius.is_finite() && radius > 0.0 {
            Ok(radius)
        } else {
            Err(CarouselError::InvalidRadius {
                height: container_height,
                scale,
            })
        }
    }

    pub fn with_presentation(mut self, presentation: PresentationOptions) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn with_scroll(mut self, scroll: ScrollOptions) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.presentation.spacing = spacing;
        self
    }

    pub fn with_radius_scale(mut self, radius_scale: f32) -> Self {
        self.presentation.radius_scale = radius_scale;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.presentation.invert = invert;
        self
    }

    pub fn with_reverse_arrangement(mut self, reverse: bool) -> Self {
        self.presentation.reverse_arrangement = reverse;
        self
    }

    /// Sets the opacity falloff area and enables per-item opacity output.
    pub fn with_alpha(mut self, blend_area: f32) -> Self {
        self.presentation.alpha = true;
        self.presentation.blend_area = blend_area;
        self
    }

    pub fn with_control_child_rotation(mut self, control: bool) -> Self {
        self.presentation.control_child_rotation = control;
        self
    }

    pub fn with_movement_type(mut self, movement_type: MovementType) -> Self {
        self.scroll.movement_type = movement_type;
        self
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.scroll.elasticity = elasticity;
        self
    }

    /// `None` disables inertia; `Some(rate)` enables it with the given deceleration rate.
    pub fn with_inertia(mut self, deceleration_rate: Option<f32>) -> Self {
        self.scroll.inertia = deceleration_rate.is_some();
        if let Some(rate) = deceleration_rate {
            self.scroll.deceleration_rate = rate;
        }
        self
    }

    pub fn with_scroll_sensitivity(mut self, sensitivity: f32) -> Self {
        self.scroll.scroll_sensitivity = sensitivity;
        self
    }

    /// `None` disables snapping; `Some(elasticity)` enables it with the given smoothing time.
    pub fn with_snap(mut self, snap_elasticity: Option<f32>) -> Self {
        self.scroll.snap_to_nearest = snap_elasticity.is_some();
        if let Some(elasticity) = snap_elasticity {
            self.scroll.snap_elasticity = elasticity;
        }
        self
    }

    pub fn with_on_invalidate(
        mut self,
        on_invalidate: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_invalidate = on_invalidate.map(|f| Arc::new(f) as _);
        self
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CarouselError::InvalidOption { name, value })
    }
}

impl std::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("presentation", &self.presentation)
            .field("scroll", &self.scroll)
            .field("enabled", &self.enabled)
            .field("on_invalidate", &self.on_invalidate.is_some())
            .finish()
    }
}
