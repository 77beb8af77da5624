//! Catenary shape fitting.
//!
//! Coordinates follow the rendering surface: +y grows downward, so the
//! chain sags toward larger y. Internally the solver works with the
//! mathematical form `y = a·cosh(x/a) + c` and flips on sampling.
//!
//! Two solve paths: a Newton-Raphson solve of the transcendental length
//! equation when the anchors sit at (nearly) equal heights, and a damped
//! fixed-point iteration over the curve parameter and horizontal offset
//! when they do not. Neither path is guaranteed to converge for extreme
//! length/distance ratios; the best estimate at budget exhaustion is
//! returned rather than an error.

use swingset_math::{distance, lerp, Vec2};

/// Number of sample points in every returned polyline.
pub const SAMPLES: usize = 101;

/// Slack threshold: chains shorter than `dist * (1 + TAUT_EPS)` render straight.
const TAUT_EPS: f64 = 0.005;
/// Height difference below which the symmetric solve applies.
const LEVEL_THRESHOLD: f64 = 1.0;

const NEWTON_TOL: f64 = 1e-4;
const NEWTON_MAX_ITER: usize = 100;
/// Derivative magnitude below which Newton iteration stops to avoid blow-up.
const DERIV_FLOOR: f64 = 1e-10;

const ASYM_MAX_ITER: usize = 50;
const ASYM_TOL: f64 = 0.01;
/// Empirical damping gains for the asymmetric fixed-point update.
const ASYM_LENGTH_GAIN: f64 = 0.1;
const ASYM_VERTICAL_GAIN: f64 = 0.01;

/// Compute the hanging-curve polyline from `a1` to `a2` for a chain of the
/// given length. Always returns [`SAMPLES`] points, starting at `a1`.
pub fn solve(a1: &Vec2, a2: &Vec2, chain_length: f64) -> Vec<Vec2> {
    let dist = distance(a1, a2);
    let h = (a2.x - a1.x).abs();

    // Taut chain cannot sag; near-vertical anchors leave no horizontal
    // span for the cosh parameterization.
    if chain_length <= dist * (1.0 + TAUT_EPS) || h < 1e-6 {
        return straight_line(a1, a2);
    }

    if (a2.y - a1.y).abs() < LEVEL_THRESHOLD {
        solve_symmetric(a1, a2, chain_length)
    } else {
        solve_asymmetric(a1, a2, chain_length)
    }
}

/// Comparison parabola with the given mid-span sag, sampled like [`solve`].
/// Visual contrast only, not physically derived.
pub fn parabola_approx(a1: &Vec2, a2: &Vec2, sag: f64) -> Vec<Vec2> {
    (0..SAMPLES)
        .map(|i| {
            let t = i as f64 / (SAMPLES - 1) as f64;
            let chord = lerp(a1, a2, t);
            Vec2::new(chord.x, chord.y + 4.0 * sag * t * (1.0 - t))
        })
        .collect()
}

fn straight_line(a1: &Vec2, a2: &Vec2) -> Vec<Vec2> {
    (0..SAMPLES)
        .map(|i| lerp(a1, a2, i as f64 / (SAMPLES - 1) as f64))
        .collect()
}

/// Equal-height anchors: find `a` solving `2a·sinh(b/a) = L` by Newton-Raphson.
fn solve_symmetric(a1: &Vec2, a2: &Vec2, chain_length: f64) -> Vec<Vec2> {
    let h = (a2.x - a1.x).abs();
    let b = h / 2.0;

    let mut a = b;
    for _ in 0..NEWTON_MAX_ITER {
        let r = b / a;
        let f = 2.0 * a * r.sinh() - chain_length;
        let fp = 2.0 * r.sinh() - 2.0 * r * r.cosh();
        if fp.abs() < DERIV_FLOOR {
            break;
        }
        // Cap the step at half the current parameter: a raw Newton step on
        // a deeply slack chain overshoots past zero, where sinh blows up.
        let delta = (f / fp).clamp(-0.5 * a, 0.5 * a);
        if !delta.is_finite() {
            break;
        }
        a = (a - delta).clamp(1e-6, 100.0 * h);
        if delta.abs() < NEWTON_TOL {
            break;
        }
    }

    // Local x runs from -b at a1 to +b at a2.
    sample_catenary(a1, a2, a, -b)
}

/// Unequal-height anchors: damped fixed-point iteration on `(a, x1)` with
/// the horizontal span fixed, matching both the vertical-drop and the
/// chain-length constraints. Arc length responds to `a` (larger a flattens
/// and shortens the curve), vertical drop to the window offset `x1`.
fn solve_asymmetric(a1: &Vec2, a2: &Vec2, chain_length: f64) -> Vec<Vec2> {
    let h = (a2.x - a1.x).abs();
    // Drop target in the internal frame; the sampled curve is flipped.
    let dy = a1.y - a2.y;

    let a_max = 10.0 * h;
    let a_min = a_max.min(10.0);
    let x_bound = 10.0 * h;

    let mut a = (h / 2.0).clamp(a_min, a_max);
    let mut x1 = -h / 2.0;

    for _ in 0..ASYM_MAX_ITER {
        let x2 = x1 + h;
        let length = a * ((x2 / a).sinh() - (x1 / a).sinh());
        let vertical = a * ((x2 / a).cosh() - (x1 / a).cosh());

        let length_err = length - chain_length;
        let vertical_err = vertical - dy;
        if !length_err.is_finite() || !vertical_err.is_finite() {
            break;
        }
        if length_err.abs() < ASYM_TOL && vertical_err.abs() < ASYM_TOL {
            break;
        }

        a = (a + length_err * ASYM_LENGTH_GAIN).clamp(a_min, a_max);
        x1 = (x1 - vertical_err * ASYM_VERTICAL_GAIN).clamp(-x_bound, x_bound);
    }

    sample_catenary(a1, a2, a, x1)
}

/// Sample the fitted curve at [`SAMPLES`] even positions between the
/// anchors. `x1_local` is the internal coordinate at `a1`; the internal
/// axis follows the a1→a2 traversal, so mirrored anchor order works
/// unchanged. The vertical offset pins the curve to `a1` and the flip
/// makes the sag point toward +y.
fn sample_catenary(a1: &Vec2, a2: &Vec2, a: f64, x1_local: f64) -> Vec<Vec2> {
    let h = (a2.x - a1.x).abs();
    let c = a1.y + a * (x1_local / a).cosh();
    (0..SAMPLES)
        .map(|i| {
            let t = i as f64 / (SAMPLES - 1) as f64;
            let x = a1.x + t * (a2.x - a1.x);
            let xl = x1_local + t * h;
            Vec2::new(x, c - a * (xl / a).cosh())
        })
        .collect()
}
