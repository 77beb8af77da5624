//! Nested rotating-circle chains.
//!
//! A chain is an ordered sequence of [`Circle`]s; joint i sits at the
//! vector sum of the root offset and every rotating radius up to i.
//! Position evaluation is pure in `(circles, time)`; callers that prefer
//! accumulating phase incrementally use [`advance_phase`], and the two
//! models agree whenever the absolute time equals the accumulated delta.

use serde::{Deserialize, Serialize};
use swingset_math::Vec2;

/// One rotating circle in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Base offset; only the root circle's offset is used (as the chain's
    /// translation origin).
    pub center: Vec2,
    /// Rotating arm length.
    pub radius: f64,
    /// Angular rate (rad/s).
    pub speed: f64,
    /// Phase (rad), advanced over time.
    pub angle: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64, speed: f64, angle: f64) -> Self {
        Self {
            center,
            radius,
            speed,
            angle,
        }
    }

    /// Rotating offset contributed by this circle at absolute time `time`.
    #[inline]
    fn offset_at(&self, time: f64) -> Vec2 {
        let phase = self.angle + self.speed * time;
        Vec2::new(self.radius * phase.cos(), self.radius * phase.sin())
    }
}

/// Joint positions of the chain at absolute time `time`: the root origin
/// followed by one point per circle. Empty chains produce no points.
pub fn positions_at(circles: &[Circle], time: f64) -> Vec<Vec2> {
    let Some(root) = circles.first() else {
        return Vec::new();
    };

    let mut points = Vec::with_capacity(circles.len() + 1);
    let mut current = root.center;
    points.push(current);
    for circle in circles {
        current += circle.offset_at(time);
        points.push(current);
    }
    points
}

/// A copy of the chain with each circle's phase advanced by
/// `speed · delta_time`.
pub fn advance_phase(circles: &[Circle], delta_time: f64) -> Vec<Circle> {
    circles
        .iter()
        .map(|c| Circle {
            angle: c.angle + c.speed * delta_time,
            ..*c
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn single() -> Vec<Circle> {
        vec![Circle::new(Vec2::new(400.0, 300.0), 150.0, 1.0, 0.0)]
    }

    #[test]
    fn single_circle_at_time_zero() {
        let pts = positions_at(&single(), 0.0);
        assert_eq!(pts.len(), 2);
        assert_abs_diff_eq!(pts[0].x, 400.0);
        assert_abs_diff_eq!(pts[0].y, 300.0);
        assert_abs_diff_eq!(pts[1].x, 550.0);
        assert_abs_diff_eq!(pts[1].y, 300.0);
    }

    #[test]
    fn single_circle_quarter_turn() {
        let pts = positions_at(&single(), FRAC_PI_2);
        assert_abs_diff_eq!(pts[1].x, 400.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[1].y, 450.0, epsilon = 1e-12);
    }

    #[test]
    fn chain_points_accumulate_rotating_offsets() {
        let circles = vec![
            Circle::new(Vec2::new(0.0, 0.0), 100.0, 1.0, 0.0),
            Circle::new(Vec2::new(999.0, 999.0), 50.0, -2.0, FRAC_PI_2),
        ];
        let pts = positions_at(&circles, 0.0);
        assert_eq!(pts.len(), 3);
        // Non-root centers are ignored.
        assert_abs_diff_eq!(pts[1].x, 100.0);
        assert_abs_diff_eq!(pts[1].y, 0.0);
        assert_abs_diff_eq!(pts[2].x, 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[2].y, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn phase_advance_agrees_with_absolute_time() {
        let circles = vec![
            Circle::new(Vec2::new(10.0, 20.0), 80.0, 0.7, 0.3),
            Circle::new(Vec2::new(0.0, 0.0), 40.0, -1.3, 1.1),
            Circle::new(Vec2::new(0.0, 0.0), 25.0, 3.1, -0.4),
        ];
        let t = 2.437;
        let absolute = positions_at(&circles, t);
        let incremental = positions_at(&advance_phase(&circles, t), 0.0);
        for (a, b) in absolute.iter().zip(incremental.iter()) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn phase_advance_composes_over_sub_deltas() {
        let circles = single();
        let whole = advance_phase(&circles, 1.0);
        let halves = advance_phase(&advance_phase(&circles, 0.5), 0.5);
        assert_abs_diff_eq!(whole[0].angle, halves[0].angle, epsilon = 1e-12);
    }

    #[test]
    fn empty_chain_has_no_points() {
        assert!(positions_at(&[], 1.0).is_empty());
    }

    #[test]
    fn evaluation_does_not_mutate_the_chain() {
        let circles = single();
        let before = circles.clone();
        let _ = positions_at(&circles, 5.0);
        assert_eq!(circles, before);
    }
}
