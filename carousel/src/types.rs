use glam::{Affine3A, Quat, Vec3};

/// How the scroll value is bounded by `[0, total_arc]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementType {
    /// No bounds.
    Unrestricted,
    /// Out-of-bounds values spring back.
    #[default]
    Elastic,
    /// Values are forced back inside the bounds every frame.
    Clamped,
}

/// One entry of the host's item source. The source is re-queried on every layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDesc {
    /// Linear size along the arrangement axis.
    pub extent: f32,
    pub active: bool,
    pub ignore_layout: bool,
}

impl ItemDesc {
    /// An active item that takes part in layout.
    pub fn new(extent: f32) -> Self {
        Self {
            extent,
            active: true,
            ignore_layout: false,
        }
    }

    pub fn inactive(extent: f32) -> Self {
        Self {
            active: false,
            ..Self::new(extent)
        }
    }

    pub fn ignored(extent: f32) -> Self {
        Self {
            ignore_layout: true,
            ..Self::new(extent)
        }
    }

    pub fn participates(&self) -> bool {
        self.active && !self.ignore_layout
    }
}

impl From<f32> for ItemDesc {
    fn from(extent: f32) -> Self {
        Self::new(extent)
    }
}

/// The host container the carousel lives in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    /// Extent of the container along the arrangement axis; the radius derives from it.
    pub height: f32,
    /// Local-to-world transform of the container.
    pub transform: Affine3A,
}

impl Container {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            transform: Affine3A::IDENTITY,
        }
    }

    pub fn with_transform(mut self, transform: Affine3A) -> Self {
        self.transform = transform;
        self
    }
}

/// World pose of an item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPose {
    pub translation: Vec3,
    /// `None` when the carousel does not control child rotation.
    pub rotation: Option<Quat>,
}

/// Output of a layout pass for one participating item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    /// Position in the filtered, ordered item list.
    pub index: usize,
    /// Position in the host's source sequence.
    pub source_index: usize,
    pub extent: f32,
    /// Angle the item subtends on the cylinder.
    pub angular_width: f32,
    /// Absolute angular position (independent of the current scroll value).
    pub theta: f32,
    /// `theta - value` at the time of the pass.
    pub relative_theta: f32,
    pub pose: ItemPose,
    /// Present only when opacity output is enabled.
    pub opacity: Option<f32>,
}

/// A slot produced by [`crate::Carousel::for_each_preview_slot`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewSlot {
    pub index: usize,
    /// Angle relative to the current scroll value.
    pub relative_theta: f32,
    pub pose: ItemPose,
    pub opacity: f32,
    /// `true` for synthetic slots past the end of the real item list.
    pub placeholder: bool,
}
