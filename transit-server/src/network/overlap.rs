//! How much of a slow-network route runs on the fast network.

use serde::Serialize;

use crate::grid::{CellState, Grid};

/// Route cells of a solved slow-network grid, and how many of them lie on
/// the fast network's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub total_cells: usize,
    pub overlapping_cells: usize,
}

impl Overlap {
    /// Intersect the `SolutionPath` cells of `solved` with the walkable
    /// cells of `footprint`.
    ///
    /// The footprint is the raw fast network, not a route found on it.
    pub fn measure(solved: &Grid, footprint: &Grid) -> Self {
        let mut total_cells = 0;
        let mut overlapping_cells = 0;
        for idx in 0..solved.len() {
            if solved.state_at(idx) != CellState::SolutionPath {
                continue;
            }
            total_cells += 1;
            if footprint.is_walkable(solved.position(idx)) {
                overlapping_cells += 1;
            }
        }
        Self {
            total_cells,
            overlapping_cells,
        }
    }

    /// Fraction of route cells on the fast network, or `None` for an empty
    /// route.
    pub fn ratio(&self) -> Option<f64> {
        if self.total_cells == 0 {
            None
        } else {
            Some(self.overlapping_cells as f64 / self.total_cells as f64)
        }
    }

    /// Split a route cost into `(fast_portion, slow_portion)` by the
    /// overlap ratio.
    pub fn split(&self, total_cost: f64) -> Option<(f64, f64)> {
        let fast = total_cost * self.ratio()?;
        Some((fast, total_cost - fast))
    }
}
