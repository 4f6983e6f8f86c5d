//! Nested slow/fast network grids.

use crate::grid::Grid;

use super::error::NetworkError;

/// Two grids of the same size where every walkable cell of the fast grid is
/// also walkable in the slow grid.
///
/// Overlap ratios are only meaningful when the fast network is embedded in
/// the slow one, so construction rejects pairs that are not nested.
#[derive(Debug, Clone)]
pub struct NetworkPair {
    slow: Grid,
    fast: Grid,
}

impl NetworkPair {
    pub fn new(slow: Grid, fast: Grid) -> Result<Self, NetworkError> {
        if slow.width() != fast.width() || slow.height() != fast.height() {
            return Err(NetworkError::DimensionMismatch {
                slow_width: slow.width(),
                slow_height: slow.height(),
                fast_width: fast.width(),
                fast_height: fast.height(),
            });
        }

        if let Some(position) = fast.walkable_positions().find(|p| !slow.is_walkable(*p)) {
            return Err(NetworkError::NotNested { position });
        }

        Ok(Self { slow, fast })
    }

    /// The dense network, assumed to connect every valid endpoint pair.
    pub fn slow(&self) -> &Grid {
        &self.slow
    }

    /// The sparse network embedded in the slow one.
    pub fn fast(&self) -> &Grid {
        &self.fast
    }
}
