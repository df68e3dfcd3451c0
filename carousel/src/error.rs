use thiserror::Error;

/// Errors reported when configuring or addressing a [`crate::Carousel`].
///
/// Per-frame work (ticks, input, layout passes) never fails; only configuration and explicit
/// index lookups can be rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CarouselError {
    /// The derived radius (`container_height * radius_scale / 2`) is not a positive finite number.
    #[error("radius must be positive and finite (container height {height}, radius scale {scale})")]
    InvalidRadius { height: f32, scale: f32 },

    #[error("option `{name}` is out of range (got {value})")]
    InvalidOption { name: &'static str, value: f32 },

    #[error("blend area must lie in [0, 1] (got {0})")]
    BlendAreaOutOfRange(f32),

    #[error("item index {index} out of range (item count {count})")]
    ItemOutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
