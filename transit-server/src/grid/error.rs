//! Grid validation and loading errors.

use std::fmt;

use super::Position;

/// Which end of a requested route a position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// A start or end position that cannot be searched from or to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// Position lies outside the grid.
    #[error("{endpoint} position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        position: Position,
        width: usize,
        height: usize,
    },

    /// Position lies on an obstacle.
    #[error("{endpoint} position {position} is on an obstacle")]
    BlockedEndpoint {
        endpoint: Endpoint,
        position: Position,
    },
}

impl EndpointError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            EndpointError::OutOfBounds { endpoint, .. }
            | EndpointError::BlockedEndpoint { endpoint, .. } => *endpoint,
        }
    }
}

/// Errors building a grid from raw 0/1 input.
#[derive(Debug, thiserror::Error)]
pub enum GridLoadError {
    /// No rows, or rows with no cells.
    #[error("grid input is empty")]
    Empty,

    /// A row whose length differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell that is not a non-negative integer.
    #[error("cell at row {row}, column {col} is not a non-negative integer: {value:?}")]
    InvalidCell {
        row: usize,
        col: usize,
        value: String,
    },

    /// Failed to read the input file.
    #[error("failed to read grid file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EndpointError::OutOfBounds {
            endpoint: Endpoint::Start,
            position: Position::new(5, 1),
            width: 4,
            height: 3,
        };
        assert_eq!(err.to_string(), "start position (5, 1) is outside the 4x3 grid");
        assert_eq!(err.endpoint(), Endpoint::Start);

        let err = EndpointError::BlockedEndpoint {
            endpoint: Endpoint::End,
            position: Position::new(0, 2),
        };
        assert_eq!(err.to_string(), "end position (0, 2) is on an obstacle");
        assert_eq!(err.endpoint(), Endpoint::End);

        let err = GridLoadError::Ragged {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 2 has 3 cells, expected 4");
    }
}
