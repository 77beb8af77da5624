//! Standing waves on a string.
//!
//! [`WaveString`] owns the discretized string state (dense position and
//! velocity arrays) and advances it in place with an explicit
//! finite-difference integrator. Sine-basis harmonic analysis and
//! node/antinode prediction live in [`harmonics`] as stateless helpers.

pub mod harmonics;
pub mod string;

pub use harmonics::{analyze_harmonics, antinodes, nodes};
pub use string::WaveString;

use serde::{Deserialize, Serialize};

/// Construction parameters for a string. A parameter change means a new
/// string: the previous state is discarded rather than rescaled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveParams {
    /// String tension (N).
    pub tension: f64,
    /// Linear mass density (kg/m).
    pub mass: f64,
    /// Velocity damping coefficient.
    pub damping: f64,
    /// String length (m).
    pub length: f64,
    /// Number of sample points, endpoints included.
    pub num_points: usize,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            tension: 500.0,
            mass: 0.01,
            damping: 0.1,
            length: 1.0,
            num_points: 101,
        }
    }
}
