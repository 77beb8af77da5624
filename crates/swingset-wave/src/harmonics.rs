//! Sine-basis harmonic analysis.
//!
//! A discrete sine-transform approximation, not an FFT: with fixed
//! endpoints the string's eigenmodes are `sin(n·π·x/L)`, so projecting a
//! displacement snapshot onto the first few of them is enough to read off
//! harmonic content.

use std::f64::consts::PI;

/// Amplitude of harmonics 1..=`num_harmonics` in a displacement snapshot:
/// `|Σ_i y_i·sin(n·π·i/(N-1))| / N`. Non-finite samples are skipped and a
/// non-finite projection clamps to zero.
pub fn analyze_harmonics(positions: &[f64], num_harmonics: usize) -> Vec<f64> {
    let n = positions.len();
    if n < 2 {
        return vec![0.0; num_harmonics];
    }
    (1..=num_harmonics)
        .map(|h| {
            let mut sum = 0.0;
            for (i, &y) in positions.iter().enumerate() {
                if y.is_finite() {
                    sum += y * (h as f64 * PI * i as f64 / (n - 1) as f64).sin();
                }
            }
            let amplitude = (sum / n as f64).abs();
            if amplitude.is_finite() {
                amplitude
            } else {
                0.0
            }
        })
        .collect()
}

/// Sample indices of the theoretical zero-displacement points of the given
/// harmonic, endpoints included.
pub fn nodes(harmonic: usize, num_points: usize) -> Vec<usize> {
    if harmonic == 0 || num_points < 2 {
        return Vec::new();
    }
    (0..=harmonic)
        .map(|k| ((k as f64 / harmonic as f64) * (num_points - 1) as f64).round() as usize)
        .collect()
}

/// Sample indices of the theoretical peak-amplitude points of the given
/// harmonic: the segment midpoints between consecutive nodes.
pub fn antinodes(harmonic: usize, num_points: usize) -> Vec<usize> {
    if harmonic == 0 || num_points < 2 {
        return Vec::new();
    }
    (0..harmonic)
        .map(|k| {
            (((k as f64 + 0.5) / harmonic as f64) * (num_points - 1) as f64).round() as usize
        })
        .collect()
}
