//! Network pair and comparison errors.

use crate::grid::{EndpointError, Position};

/// A slow/fast grid pair that cannot be compared.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The two grids do not cover the same area.
    #[error("network sizes differ: slow is {slow_width}x{slow_height}, fast is {fast_width}x{fast_height}")]
    DimensionMismatch {
        slow_width: usize,
        slow_height: usize,
        fast_width: usize,
        fast_height: usize,
    },

    /// A fast-network cell that the slow network does not contain.
    #[error("fast network cell {position} is not part of the slow network")]
    NotNested { position: Position },
}

/// Errors that abort one network comparison.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompareError {
    /// A start or end position is unusable on the named network.
    #[error("{label}: {source}")]
    Endpoint {
        label: String,
        #[source]
        source: EndpointError,
    },

    /// The slow network must connect every pair of valid endpoints.
    #[error(
        "no route between {start} and {end} on the {label} network; check that both endpoints are configured on it"
    )]
    SlowNetworkUnreachable {
        label: String,
        start: Position,
        end: Position,
    },

    /// The search could not allocate working memory.
    #[error("search on the {label} network could not allocate working memory")]
    AllocationFailure { label: String },

    /// Both networks of a pair carry the same label, so their report
    /// entries would collide.
    #[error("slow and fast networks are both labelled {label:?}")]
    SharedLabel { label: String },

    /// A found route without any solution cells.
    #[error("route on the {label} network has no solution cells")]
    DegenerateOverlap { label: String },
}
