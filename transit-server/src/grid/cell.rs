//! Per-cell states.

use serde::{Deserialize, Serialize};

/// Error returned when converting an unknown state code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid cell state code: {0}")]
pub struct InvalidCellCode(pub u8);

/// The state of one grid cell.
///
/// Freshly loaded grids only contain `Obstacle` and `Walkable`. The other
/// states are written by a search into its annotated copy of the grid.
/// On the wire a state is its numeric code, the format external renderers
/// consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CellState {
    /// Never traversable, never changes state.
    Obstacle,
    Walkable,
    /// Discovered by a search but never expanded.
    Border,
    /// Expanded by a search.
    Visited,
    /// Part of the reconstructed route.
    SolutionPath,
}

impl CellState {
    pub const fn code(self) -> u8 {
        match self {
            CellState::Obstacle => 0,
            CellState::Walkable => 10,
            CellState::Border => 20,
            CellState::Visited => 30,
            CellState::SolutionPath => 40,
        }
    }

    /// Map a raw loader value: zero is an obstacle, anything else walkable.
    pub const fn from_raw(value: u32) -> Self {
        if value == 0 {
            CellState::Obstacle
        } else {
            CellState::Walkable
        }
    }

    pub const fn is_walkable(self) -> bool {
        !matches!(self, CellState::Obstacle)
    }

    /// Single-character form used by `Debug` output of grids.
    pub(crate) const fn glyph(self) -> char {
        match self {
            CellState::Obstacle => '#',
            CellState::Walkable => '.',
            CellState::Border => '+',
            CellState::Visited => 'o',
            CellState::SolutionPath => '*',
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state.code()
    }
}

impl TryFrom<u8> for CellState {
    type Error = InvalidCellCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellState::Obstacle),
            10 => Ok(CellState::Walkable),
            20 => Ok(CellState::Border),
            30 => Ok(CellState::Visited),
            40 => Ok(CellState::SolutionPath),
            other => Err(InvalidCellCode(other)),
        }
    }
}
