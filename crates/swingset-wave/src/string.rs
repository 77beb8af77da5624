//! Discretized string with an explicit finite-difference integrator.

use std::f64::consts::PI;

use swingset_math::DVec;

use crate::WaveParams;

/// Pluck amplitude clamp (display units).
const MAX_PLUCK_AMPLITUDE: f64 = 50.0;
/// Displacement bound beyond which a sample is treated as diverged.
const MAX_DISPLACEMENT: f64 = 500.0;
/// Velocity bound beyond which a sample is treated as diverged.
const MAX_VELOCITY: f64 = 1000.0;
/// Empirical scale mapping physical tension/density onto display-rate wave
/// speeds; keeps the explicit scheme inside its stability limit for the
/// default parameter ranges at four sub-steps of a 60 Hz frame.
const STIFFNESS_SCALE: f64 = 5e-5;
/// Velocity injection scale for sinusoidal driving.
const DRIVE_SCALE: f64 = 0.5;

/// A string with fixed endpoints, sampled at `num_points` positions.
///
/// Sole mutable entity among the engines: the dense per-sample arrays are
/// advanced in place each frame, and a single caller owns the mutation.
/// Samples 0 and `num_points - 1` hold zero displacement and velocity at
/// all times.
pub struct WaveString {
    positions: DVec,
    velocities: DVec,
    pub tension: f64,
    pub mass: f64,
    pub damping: f64,
    pub length: f64,
    pub num_points: usize,
}

impl WaveString {
    /// Create a string at rest. Fewer than 3 sample points leaves no
    /// interior to integrate, so the count is raised to 3.
    pub fn new(params: &WaveParams) -> Self {
        let num_points = params.num_points.max(3);
        Self {
            positions: DVec::zeros(num_points),
            velocities: DVec::zeros(num_points),
            tension: params.tension,
            mass: params.mass,
            damping: params.damping,
            length: params.length,
            num_points,
        }
    }

    /// Displacement snapshot, one value per sample point.
    pub fn positions(&self) -> &[f64] {
        self.positions.as_slice()
    }

    /// Lowest standing-wave frequency of the physical string (Hz):
    /// `sqrt(tension / mass) / (2 · length)`.
    pub fn fundamental_frequency(&self) -> f64 {
        (self.tension / self.mass).sqrt() / (2.0 * self.length)
    }

    /// Set a triangular displacement peaking at the sample nearest
    /// `position_fraction`, linear to zero at both endpoints. Interior
    /// velocities reset so the release starts clean.
    pub fn pluck(&mut self, position_fraction: f64, amplitude: f64) {
        let n = self.num_points;
        let amp = amplitude.clamp(-MAX_PLUCK_AMPLITUDE, MAX_PLUCK_AMPLITUDE);
        let peak = ((position_fraction.clamp(0.0, 1.0) * (n - 1) as f64).round() as usize)
            .clamp(1, n - 2);

        for i in 1..n - 1 {
            let shape = if i <= peak {
                i as f64 / peak as f64
            } else {
                (n - 1 - i) as f64 / (n - 1 - peak) as f64
            };
            self.positions[i] = amp * shape;
            self.velocities[i] = 0.0;
        }
    }

    /// Inject a sinusoidal forcing into the velocities at the quarter,
    /// half, and three-quarter points. Velocity injection leaves the wave
    /// solution intact rather than overriding displacements.
    pub fn drive(&mut self, frequency: f64, time: f64, amplitude: f64) {
        let n = self.num_points;
        let forcing = amplitude * (2.0 * PI * frequency * time).sin() * DRIVE_SCALE;
        for idx in [n / 4, n / 2, 3 * n / 4] {
            if idx > 0 && idx < n - 1 {
                self.velocities[idx] += forcing;
            }
        }
    }

    /// Advance all interior samples one step of the explicit wave-equation
    /// discretization, then re-pin the endpoints and reset any sample the
    /// scheme has driven non-finite or out of bounds.
    pub fn update(&mut self, dt: f64) {
        let n = self.num_points;
        let dx = self.length / (n - 1) as f64;
        let c2 = self.tension / self.mass * STIFFNESS_SCALE;
        let inv_dx2 = 1.0 / (dx * dx);

        let prev = self.positions.clone();
        for i in 1..n - 1 {
            let curvature = (prev[i + 1] - 2.0 * prev[i] + prev[i - 1]) * inv_dx2;
            let accel = c2 * curvature - self.damping * self.velocities[i];
            self.velocities[i] += accel * dt;
            self.positions[i] += self.velocities[i] * dt;
        }

        self.enforce_bounds();
    }

    /// Zero all positions and velocities.
    pub fn reset(&mut self) {
        self.positions.fill(0.0);
        self.velocities.fill(0.0);
    }

    fn enforce_bounds(&mut self) {
        let n = self.num_points;
        for i in 0..n {
            let y = self.positions[i];
            if !y.is_finite() || y.abs() > MAX_DISPLACEMENT {
                self.positions[i] = 0.0;
            }
            let v = self.velocities[i];
            if !v.is_finite() || v.abs() > MAX_VELOCITY {
                self.velocities[i] = 0.0;
            }
        }
        self.positions[0] = 0.0;
        self.positions[n - 1] = 0.0;
        self.velocities[0] = 0.0;
        self.velocities[n - 1] = 0.0;
    }
}
