//! Chord/arc geometry: linear extents to angles on the carousel cylinder, and the angular
//! opacity falloff.

use std::f32::consts::PI;

/// Extent substituted for zero-length items so neighbours never collapse onto each other.
pub const MIN_ITEM_EXTENT: f32 = 1.0;

/// Maps a linear extent (a chord on a circle of `radius`) to the angle it subtends.
///
/// `theta = asin(clamp(extent / (2 * radius), -1, 1)) * 2`
///
/// Extents larger than the diameter saturate at `π` (the item spans the whole visible
/// hemisphere). Negative extents map to negative angles, which is what the input path relies on
/// for signed drag/wheel deltas. `radius` must be positive; see
/// [`crate::CarouselOptions::validate`].
pub fn angular_half_width(extent: f32, radius: f32) -> f32 {
    let ratio = (extent / 2.0 / radius).clamp(-1.0, 1.0);
    ratio.asin() * 2.0
}

/// Same as [`angular_half_width`], but for item extents: a zero extent is replaced by
/// [`MIN_ITEM_EXTENT`].
pub fn item_angular_width(extent: f32, radius: f32) -> f32 {
    let extent = if extent == 0.0 { MIN_ITEM_EXTENT } else { extent };
    angular_half_width(extent, radius)
}

/// Opacity of an item sitting `theta` radians away from the focal centre.
///
/// `1` at the centre, fading smoothly to `0` at `|theta| = π * blend_area`. With
/// `blend_area == 0` only an item exactly at the centre stays visible.
pub fn opacity(theta: f32, blend_area: f32) -> f32 {
    let edge = PI * blend_area;
    if edge == 0.0 {
        return if theta == 0.0 { 1.0 } else { 0.0 };
    }
    smoothstep(inverse_lerp(edge, 0.0, theta.abs())).clamp(0.0, 1.0)
}

/// Where `v` sits between `a` and `b`, clamped to `[0, 1]`.
pub(crate) fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((v - a) / (b - a)).clamp(0.0, 1.0)
}

pub(crate) fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
