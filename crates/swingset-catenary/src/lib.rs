//! Hanging-chain shape solver.
//!
//! Given two anchor points and a chain length, computes the catenary
//! `y = a·cosh(x/a) + c` passing through both anchors, degrading to a
//! straight line when the chain is taut. Also provides a decorative
//! per-segment tension estimate and a parabola comparison curve.

pub mod solver;
pub mod tension;

pub use solver::{parabola_approx, solve, SAMPLES};
pub use tension::{tension_at, Tension};

use serde::{Deserialize, Serialize};
use swingset_math::Vec2;

/// A user-placed chain endpoint with a stable identity.
///
/// Anchors are created and destroyed by the interaction layer; the solver
/// only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Stable identity assigned by the interaction layer.
    pub id: u64,
    /// Position in caller units.
    pub pos: Vec2,
}

impl Anchor {
    pub fn new(id: u64, pos: Vec2) -> Self {
        Self { id, pos }
    }
}

/// Chain configuration.
///
/// `gravity_scale` scales the decorative tension output only; the curve
/// shape depends solely on geometry and `chain_length`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatenaryParams {
    pub chain_length: f64,
    pub gravity_scale: f64,
}

impl Default for CatenaryParams {
    fn default() -> Self {
        Self {
            chain_length: 400.0,
            gravity_scale: 1.0,
        }
    }
}
