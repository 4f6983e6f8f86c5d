//! Search configuration.

use std::f64::consts::SQRT_2;

use serde::{Deserialize, Serialize};

use crate::grid::Position;

const ORTHOGONAL_STEPS: [(i32, i32, f64); 4] =
    [(0, -1, 1.0), (-1, 0, 1.0), (1, 0, 1.0), (0, 1, 1.0)];

// Row-major scan of the 3x3 neighbourhood, skipping the centre.
const OCTILE_STEPS: [(i32, i32, f64); 8] = [
    (-1, -1, SQRT_2),
    (0, -1, 1.0),
    (1, -1, SQRT_2),
    (-1, 0, 1.0),
    (1, 0, 1.0),
    (-1, 1, SQRT_2),
    (0, 1, 1.0),
    (1, 1, SQRT_2),
];

/// Which neighbours a cell can step to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Orthogonal unit steps only; Manhattan heuristic.
    Four,
    /// Orthogonal steps cost 1, diagonal steps cost √2; octile heuristic.
    ///
    /// A diagonal step only requires its destination to be walkable, so
    /// routes may slip between two obstacles touching at a corner.
    #[default]
    Eight,
}

impl Connectivity {
    /// Neighbour offsets with their step costs, in expansion order.
    pub fn steps(self) -> &'static [(i32, i32, f64)] {
        match self {
            Connectivity::Four => &ORTHOGONAL_STEPS,
            Connectivity::Eight => &OCTILE_STEPS,
        }
    }

    /// Cost of the cheapest obstacle-free route between two cells.
    ///
    /// Never overestimates, so it is an admissible A* heuristic.
    pub fn heuristic(self, from: Position, to: Position) -> f64 {
        let dx = f64::from((from.x - to.x).abs());
        let dy = f64::from((from.y - to.y).abs());
        match self {
            Connectivity::Four => dx + dy,
            Connectivity::Eight => {
                let (short, long) = if dx < dy { (dx, dy) } else { (dy, dx) };
                short * SQRT_2 + (long - short)
            }
        }
    }
}

/// Configuration for a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub connectivity: Connectivity,
}

impl SearchConfig {
    pub fn new(connectivity: Connectivity) -> Self {
        Self { connectivity }
    }
}
