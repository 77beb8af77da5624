//! 2D math primitives for the swingset simulation engines.
//!
//! All engines work in caller-defined units (typically screen pixels for
//! geometry, SI-like units for physical parameters) and share the aliases
//! defined here.

use nalgebra as na;

/// 2D vector / point alias.
pub type Vec2 = na::Vector2<f64>;
/// Dynamic vector for dense per-sample arrays.
pub type DVec = na::DVector<f64>;

/// Standard gravity (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Linear interpolation between two points, `t` in [0, 1].
#[inline]
pub fn lerp(a: &Vec2, b: &Vec2, t: f64) -> Vec2 {
    a + (b - a) * t
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Vec2, b: &Vec2) -> f64 {
    (b - a).norm()
}

/// Arc length of a polyline: sum of consecutive segment lengths.
pub fn polyline_length(points: &[Vec2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}
