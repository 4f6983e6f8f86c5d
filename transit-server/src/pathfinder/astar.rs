//! A* search.

use tracing::{debug, trace};

use crate::grid::{CellState, EndpointError, Grid, Position};

use super::config::SearchConfig;
use super::node::{OutOfMemory, SearchState};

/// A route found by the pathfinder.
#[derive(Debug, Clone)]
pub struct Route {
    /// Sum of step costs along the route, in grid distance units.
    pub total_cost: f64,

    /// Copy of the searched grid with visited, border and route cells marked.
    pub grid: Grid,

    /// Cells of the route from start to end inclusive.
    pub path: Vec<Position>,

    /// Number of nodes expanded before the goal was reached.
    pub expanded: usize,
}

/// Outcome of one pathfinder invocation.
#[derive(Debug, Clone)]
pub enum PathResult {
    Found(Route),

    /// Start and end lie in disconnected walkable regions.
    NotFound,

    /// Working memory for the search could not be allocated.
    AllocationFailure,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    /// The route, if one was found.
    pub fn into_route(self) -> Option<Route> {
        match self {
            PathResult::Found(route) => Some(route),
            _ => None,
        }
    }
}

/// Find the lowest-cost route with the default 8-connected search.
///
/// Endpoints are validated before any search work: an endpoint outside the
/// grid or on an obstacle is an error, while an unreachable goal is the
/// ordinary [`PathResult::NotFound`] outcome.
pub fn find_path(grid: &Grid, start: Position, end: Position) -> Result<PathResult, EndpointError> {
    find_path_with(grid, start, end, &SearchConfig::default())
}

/// Find the lowest-cost route using the given search configuration.
pub fn find_path_with(
    grid: &Grid,
    start: Position,
    end: Position,
    config: &SearchConfig,
) -> Result<PathResult, EndpointError> {
    grid.validate_endpoints(start, end)?;

    // Validation guarantees both endpoints are in bounds.
    let (Some(start_idx), Some(goal_idx)) = (grid.index(start), grid.index(end)) else {
        return Ok(PathResult::NotFound);
    };

    let connectivity = config.connectivity;
    let frontier_hint = 2 * (grid.width() + grid.height());
    let Ok(mut state) = SearchState::try_new(grid.len(), frontier_hint) else {
        debug!(cells = grid.len(), "could not allocate search working memory");
        return Ok(PathResult::AllocationFailure);
    };

    let mut annotated = grid.cleared();
    let mut expanded = 0usize;

    if state
        .relax(start_idx, None, 0.0, connectivity.heuristic(start, end))
        .is_err()
    {
        debug!("could not grow the search frontier");
        return Ok(PathResult::AllocationFailure);
    }

    while let Some(current) = state.pop() {
        if current == goal_idx {
            let total_cost = state.nodes[goal_idx].cost.g;

            let mut chain = state.trace_back(goal_idx);
            chain.reverse();
            for &idx in &chain {
                annotated.mark(idx, CellState::SolutionPath);
            }
            let path: Vec<Position> = chain.into_iter().map(|idx| grid.position(idx)).collect();

            debug!(
                start = %start,
                end = %end,
                cost = total_cost,
                cells = path.len(),
                expanded,
                "route found"
            );

            return Ok(PathResult::Found(Route {
                total_cost,
                grid: annotated,
                path,
                expanded,
            }));
        }

        expanded += 1;
        annotated.mark(current, CellState::Visited);

        let pos = grid.position(current);
        let g = state.nodes[current].cost.g;

        for &(dx, dy, step_cost) in connectivity.steps() {
            let neighbor = pos.offset(dx, dy);
            let Some(ni) = grid.index(neighbor) else {
                continue;
            };
            if !grid.state_at(ni).is_walkable() {
                continue;
            }

            let h = connectivity.heuristic(neighbor, end);
            match state.relax(ni, Some(current), g + step_cost, h) {
                Ok(true) => {
                    trace!(from = %pos, to = %neighbor, g = g + step_cost, "relaxed");
                    annotated.mark(ni, CellState::Border);
                }
                Ok(false) => {}
                Err(OutOfMemory) => {
                    debug!(expanded, "could not grow the search frontier");
                    return Ok(PathResult::AllocationFailure);
                }
            }
        }
    }

    debug!(start = %start, end = %end, expanded, "frontier exhausted without reaching goal");
    Ok(PathResult::NotFound)
}
