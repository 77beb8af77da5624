//! Bounded history buffers.
//!
//! Trails and energy plots want "the last K samples", not an ever-growing
//! log, so both buffer types evict the oldest entry once full. JSON export
//! serves offline inspection of recorded runs.

use std::collections::VecDeque;

use swingset_math::Vec2;

/// Fixed-capacity trail of 2D positions, oldest-evicted.
#[derive(Debug, Clone)]
pub struct TraceBuffer {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl TraceBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a position, evicting the oldest once at capacity.
    pub fn push(&mut self, point: Vec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Oldest-to-newest iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Export as a JSON array of `[x, y]` pairs, oldest first.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let pairs: Vec<[f64; 2]> = self.points.iter().map(|p| [p.x, p.y]).collect();
        serde_json::to_string(&pairs)
    }
}

/// Fixed-capacity scalar time series, oldest-evicted. Used for energy and
/// amplitude histories.
#[derive(Debug, Clone)]
pub struct ScalarTrace {
    values: VecDeque<f64>,
    capacity: usize,
}

impl ScalarTrace {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Most recently pushed value.
    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    /// (min, max) over the retained window, for plot scaling.
    pub fn range(&self) -> Option<(f64, f64)> {
        let mut it = self.values.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let values: Vec<f64> = self.values.iter().copied().collect();
        serde_json::to_string(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_evicts_oldest_at_capacity() {
        let mut trail = TraceBuffer::new(3);
        for i in 0..5 {
            trail.push(Vec2::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_capacity_trace_stays_empty() {
        let mut trail = TraceBuffer::new(0);
        trail.push(Vec2::new(1.0, 1.0));
        assert!(trail.is_empty());
    }

    #[test]
    fn trace_exports_ordered_json_pairs() {
        let mut trail = TraceBuffer::new(4);
        trail.push(Vec2::new(1.0, 2.0));
        trail.push(Vec2::new(3.0, 4.0));
        assert_eq!(trail.to_json().unwrap(), "[[1.0,2.0],[3.0,4.0]]");
    }

    #[test]
    fn scalar_trace_tracks_latest_and_range() {
        let mut energy = ScalarTrace::new(4);
        assert_eq!(energy.latest(), None);
        assert_eq!(energy.range(), None);

        for v in [3.0, -1.0, 7.0, 2.0, 5.0] {
            energy.push(v);
        }
        // First value evicted.
        assert_eq!(energy.len(), 4);
        assert_eq!(energy.latest(), Some(5.0));
        assert_eq!(energy.range(), Some((-1.0, 7.0)));
    }

    #[test]
    fn clear_empties_the_window() {
        let mut energy = ScalarTrace::new(2);
        energy.push(1.0);
        energy.clear();
        assert!(energy.is_empty());
        assert_eq!(energy.latest(), None);
    }
}
