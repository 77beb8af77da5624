//! Overlay ensembles.
//!
//! Seeds a fan of near-identical trajectories from one base state. Because
//! [`step`](crate::step) is pure, each overlay owns an independent state
//! value and the fan diverges chaotically under identical integration.

use crate::{PendulumParams, PendulumState};
use swingset_math::deg_to_rad;

/// Produce `count` states: the first identical to `base`, the rest with
/// both angles offset by `((i − count/2)/count)·randomness` degrees.
/// Angular velocities are shared. The spread is deterministic so overlay
/// runs are reproducible.
pub fn overlays(base: &PendulumState, count: usize, randomness_deg: f64) -> Vec<PendulumState> {
    (0..count)
        .map(|i| {
            if i == 0 {
                *base
            } else {
                let spread = (i as f64 - count as f64 / 2.0) / count as f64;
                let offset = deg_to_rad(spread * randomness_deg);
                PendulumState {
                    theta1: base.theta1 + offset,
                    theta2: base.theta2 + offset,
                    ..*base
                }
            }
        })
        .collect()
}

/// Advance every overlay state by one step.
pub fn step_ensemble(states: &mut [PendulumState], params: &PendulumParams, dt: f64) {
    for state in states {
        *state = crate::dynamics::step(state, params, dt);
    }
}
