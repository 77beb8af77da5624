//! Mechanical energy accounting.
//!
//! Potential energy is measured from the pivot with upward-positive
//! heights, so a hanging pendulum carries negative potential. Total energy
//! is the conserved quantity to monitor for integrator drift.

use crate::{PendulumParams, PendulumState};

/// Kinetic, potential, and total mechanical energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

/// Energy of the double pendulum in the given state.
pub fn energy(state: &PendulumState, params: &PendulumParams) -> Energy {
    let PendulumState {
        theta1,
        theta2,
        omega1,
        omega2,
    } = *state;
    let p = params;

    let v1_sq = (p.l1 * omega1) * (p.l1 * omega1);
    // Bob 2 velocity includes the cross term from arm 1 carrying arm 2.
    let v2_sq = v1_sq
        + (p.l2 * omega2) * (p.l2 * omega2)
        + 2.0 * p.l1 * p.l2 * omega1 * omega2 * (theta1 - theta2).cos();
    let kinetic = 0.5 * p.m1 * v1_sq + 0.5 * p.m2 * v2_sq;

    let y1 = -p.l1 * theta1.cos();
    let y2 = y1 - p.l2 * theta2.cos();
    let potential = p.m1 * p.g * y1 + p.m2 * p.g * y2;

    Energy {
        kinetic,
        potential,
        total: kinetic + potential,
    }
}
