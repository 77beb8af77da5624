//! Double-pendulum dynamics.
//!
//! `PendulumState` is a plain value; [`step`] is a pure function returning
//! the next state, so any number of independent trajectories can share one
//! parameter set. Energy accounting and overlay ensembles support chaos
//! demonstrations.

pub mod dynamics;
pub mod energy;
pub mod ensemble;

pub use dynamics::{positions, step};
pub use energy::{energy, Energy};
pub use ensemble::{overlays, step_ensemble};

use serde::{Deserialize, Serialize};
use swingset_math::GRAVITY;

/// Angular state of the two arms: angles (radians from vertical) and
/// angular velocities. Angles are never wrapped; trigonometric evaluation
/// does not care and unbounded angles keep winding visible to callers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PendulumState {
    pub theta1: f64,
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,
}

impl PendulumState {
    pub fn new(theta1: f64, theta2: f64, omega1: f64, omega2: f64) -> Self {
        Self {
            theta1,
            theta2,
            omega1,
            omega2,
        }
    }

    /// Released from rest at the given angles.
    pub fn at_rest(theta1: f64, theta2: f64) -> Self {
        Self::new(theta1, theta2, 0.0, 0.0)
    }
}

/// Immutable physical constants for one simulation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PendulumParams {
    /// Arm lengths.
    pub l1: f64,
    pub l2: f64,
    /// Bob masses.
    pub m1: f64,
    pub m2: f64,
    /// Gravitational acceleration.
    pub g: f64,
    /// Linear angular-velocity damping on each arm.
    pub damping: f64,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            l1: 150.0,
            l2: 150.0,
            m1: 10.0,
            m2: 10.0,
            g: GRAVITY,
            damping: 0.0,
        }
    }
}
