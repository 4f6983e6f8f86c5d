//! Obstacle grids and the positions that address them.
//!
//! A [`Grid`] is a fixed-size matrix of [`CellState`]s. Grids are built once
//! from external 0/1 input and never resized; searches read them and hand
//! back an annotated copy.

mod cell;
mod error;
mod load;
mod position;

pub use cell::{CellState, InvalidCellCode};
pub use error::{Endpoint, EndpointError, GridLoadError};
pub use position::Position;

/// A fixed-size matrix of cell states, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid where every cell has the same state.
    pub fn filled(width: usize, height: usize, state: CellState) -> Self {
        Self {
            width,
            height,
            cells: vec![state; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True iff `0 <= x < width` and `0 <= y < height`.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// True iff the position is in bounds and not an obstacle.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(CellState::is_walkable)
    }

    /// The state of the cell at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Linear index of a position, or `None` when out of bounds.
    pub fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y as usize * self.width + pos.x as usize)
        } else {
            None
        }
    }

    /// Position of a linear index. The index must be below [`Grid::len`].
    pub fn position(&self, idx: usize) -> Position {
        Position::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// State of the cell at a linear index.
    pub(crate) fn state_at(&self, idx: usize) -> CellState {
        self.cells[idx]
    }

    /// Change the state of the cell at a linear index.
    ///
    /// Obstacles never change state, so writes to them are ignored.
    pub(crate) fn mark(&mut self, idx: usize, state: CellState) {
        let cell = &mut self.cells[idx];
        if *cell != CellState::Obstacle {
            *cell = state;
        }
    }

    /// Check a start/end pair before any search work begins.
    ///
    /// Bounds are checked for both endpoints before walkability, so an
    /// out-of-bounds end is reported even if the start is blocked.
    pub fn validate_endpoints(&self, start: Position, end: Position) -> Result<(), EndpointError> {
        for (endpoint, pos) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !self.in_bounds(pos) {
                return Err(EndpointError::OutOfBounds {
                    endpoint,
                    position: pos,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        for (endpoint, pos) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !self.is_walkable(pos) {
                return Err(EndpointError::BlockedEndpoint {
                    endpoint,
                    position: pos,
                });
            }
        }
        Ok(())
    }

    /// Iterate over all positions whose cell is not an obstacle.
    pub fn walkable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_walkable())
            .map(|(idx, _)| self.position(idx))
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| **c == state).count()
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Export as a plain matrix of state codes for external renderers.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// A copy with every search annotation reset to `Walkable`.
    pub fn cleared(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|c| match c {
                CellState::Obstacle => CellState::Obstacle,
                _ => CellState::Walkable,
            })
            .collect();
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid({}x{})", self.width, self.height)?;
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn sample() -> Grid {
        Grid::parse_csv("1,1,1\n1,0,1\n").unwrap()
    }

    #[test]
    fn bounds() {
        let grid = sample();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);

        assert!(grid.in_bounds(pos(0, 0)));
        assert!(grid.in_bounds(pos(2, 1)));
        assert!(!grid.in_bounds(pos(3, 0)));
        assert!(!grid.in_bounds(pos(0, 2)));
        assert!(!grid.in_bounds(pos(-1, 0)));
        assert!(!grid.in_bounds(pos(0, -1)));
    }

    #[test]
    fn walkability() {
        let grid = sample();
        assert!(grid.is_walkable(pos(0, 0)));
        assert!(!grid.is_walkable(pos(1, 1)));
        assert!(!grid.is_walkable(pos(5, 5)));
    }

    #[test]
    fn index_round_trip() {
        let grid = sample();
        let idx = grid.index(pos(2, 1)).unwrap();
        assert_eq!(idx, 5);
        assert_eq!(grid.position(idx), pos(2, 1));
        assert_eq!(grid.index(pos(3, 1)), None);
    }

    #[test]
    fn mark_never_changes_obstacles() {
        let mut grid = sample();
        let wall = grid.index(pos(1, 1)).unwrap();
        grid.mark(wall, CellState::SolutionPath);
        assert_eq!(grid.get(pos(1, 1)), Some(CellState::Obstacle));

        let open = grid.index(pos(0, 0)).unwrap();
        grid.mark(open, CellState::Visited);
        assert_eq!(grid.get(pos(0, 0)), Some(CellState::Visited));
    }

    #[test]
    fn validate_all_four_failures() {
        let grid = sample();
        let ok = pos(0, 0);
        let outside = pos(9, 0);
        let wall = pos(1, 1);

        assert!(grid.validate_endpoints(ok, pos(2, 1)).is_ok());

        assert_eq!(
            grid.validate_endpoints(outside, ok),
            Err(EndpointError::OutOfBounds {
                endpoint: Endpoint::Start,
                position: outside,
                width: 3,
                height: 2,
            })
        );
        assert_eq!(
            grid.validate_endpoints(ok, outside),
            Err(EndpointError::OutOfBounds {
                endpoint: Endpoint::End,
                position: outside,
                width: 3,
                height: 2,
            })
        );
        assert_eq!(
            grid.validate_endpoints(wall, ok),
            Err(EndpointError::BlockedEndpoint {
                endpoint: Endpoint::Start,
                position: wall,
            })
        );
        assert_eq!(
            grid.validate_endpoints(ok, wall),
            Err(EndpointError::BlockedEndpoint {
                endpoint: Endpoint::End,
                position: wall,
            })
        );
    }

    #[test]
    fn bounds_checked_before_obstacles() {
        let grid = sample();
        let err = grid.validate_endpoints(pos(1, 1), pos(-1, 0)).unwrap_err();
        assert!(matches!(
            err,
            EndpointError::OutOfBounds {
                endpoint: Endpoint::End,
                ..
            }
        ));
    }

    #[test]
    fn counts_and_codes() {
        let grid = sample();
        assert_eq!(grid.count(CellState::Walkable), 5);
        assert_eq!(grid.count(CellState::Obstacle), 1);
        assert_eq!(grid.walkable_positions().count(), 5);
        assert_eq!(grid.to_codes(), vec![vec![10, 10, 10], vec![10, 0, 10]]);
    }

    #[test]
    fn cleared_resets_annotations() {
        let mut grid = sample();
        grid.mark(0, CellState::SolutionPath);
        grid.mark(1, CellState::Visited);
        let clean = grid.cleared();
        assert_eq!(clean, sample());
    }
}
