//! Frame timing for the per-frame simulation driver.
//!
//! Time advances only in per-frame increments measured from the wall
//! clock. The delta is clamped before use so a backgrounded or paused
//! page does not hand the integrators one enormous unstable step.

use std::time::Instant;

/// Largest frame delta handed to the engines (s).
pub const MAX_FRAME_DT: f64 = 1.0 / 60.0;

/// Wall-clock frame timer; deltas are clamped to [`MAX_FRAME_DT`].
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick, clamped to [`MAX_FRAME_DT`].
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a frame delta into `count` equal sub-steps. The wave integrator
/// runs several sub-steps per frame to stay inside its stability limit;
/// a zero count degrades to one whole step.
pub fn substeps(dt: f64, count: usize) -> impl Iterator<Item = f64> {
    let count = count.max(1);
    let sub = dt / count as f64;
    (0..count).map(move |_| sub)
}
