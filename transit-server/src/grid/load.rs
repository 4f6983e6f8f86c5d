//! Building grids from raw 0/1 input.

use std::path::Path;

use super::{CellState, Grid, GridLoadError};

impl Grid {
    /// Build a grid from rows of raw values. Zero is an obstacle, any other
    /// value is walkable.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GridLoadError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridLoadError::Empty);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridLoadError::Ragged {
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.into_iter().map(CellState::from_raw));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse comma-separated rows of integers. Blank lines are skipped.
    pub fn parse_csv(input: &str) -> Result<Self, GridLoadError> {
        let rows = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.split(',')
                    .enumerate()
                    .map(|(col, raw)| {
                        let raw = raw.trim();
                        raw.parse::<u32>().map_err(|_| GridLoadError::InvalidCell {
                            row,
                            col,
                            value: raw.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    /// Read and parse a CSV grid file.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, GridLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_csv(&contents)
    }
}
