//! Decorative per-segment tension estimate.

use swingset_math::Vec2;

/// Scales mass·gravity into display-friendly magnitudes.
const TENSION_GAIN: f64 = 0.05;
/// Floor on |cos| so near-vertical segments stay bounded.
const COS_FLOOR: f64 = 0.1;

/// Tension at one polyline segment: direction plus a display magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tension {
    pub magnitude: f64,
    /// Segment direction (radians from the +x axis).
    pub angle: f64,
}

/// Estimate the tension along the segment from `point` to `next_point`.
///
/// The magnitude grows as the segment turns vertical, modeling the larger
/// share of chain weight carried near the anchors. Not a physically
/// rigorous tension solve; intended for visual annotation.
pub fn tension_at(point: &Vec2, next_point: &Vec2, mass: f64, gravity: f64) -> Tension {
    let angle = (next_point.y - point.y).atan2(next_point.x - point.x);
    let magnitude = mass * gravity * TENSION_GAIN / angle.cos().abs().max(COS_FLOOR);
    Tension { magnitude, angle }
}
