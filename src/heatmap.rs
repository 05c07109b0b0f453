//! Per-cell ship likelihood, normalized to `[0, 1]`.

use alloc::vec::Vec;

use crate::common::Pos;

/// An `N×N` grid of likelihoods, row-major. The most likely cell is `1.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Heatmap {
    size: usize,
    values: Vec<f64>,
}

impl Heatmap {
    /// Normalize raw placement counts by their maximum.
    ///
    /// Also returns the last position in row-major order whose count equals
    /// `max`. `max` must be non-zero and no smaller than any count.
    pub(crate) fn normalize(size: usize, counts: &[u64], max: u64) -> (Self, Pos) {
        debug_assert_eq!(counts.len(), size * size);
        debug_assert!(max > 0);
        let mut best = (0, 0);
        let values = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                if count == max {
                    best = (i % size, i / size);
                }
                count as f64 / max as f64
            })
            .collect();
        (Heatmap { size, values }, best)
    }

    /// Side length of the heatmap.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Likelihood at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.values.get(y * self.size + x).copied()
    }

    /// Rows in order, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.size.max(1))
    }

    /// Largest value in the heatmap.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}
