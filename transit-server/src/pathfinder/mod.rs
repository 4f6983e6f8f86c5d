//! Single-network A* search over obstacle grids.
//!
//! The pathfinder finds the lowest-cost walkable route between two
//! positions and returns a copy of the grid annotated with what the search
//! touched: expanded cells are `Visited`, discovered-but-unexpanded cells
//! are `Border` and the route itself is `SolutionPath`.
//!
//! Searches are pure: the input grid is only read, and each call owns its
//! node arena for its whole duration, so independent searches may run on
//! separate threads over the same grid.

mod astar;
mod config;
mod node;

pub use astar::{PathResult, Route, find_path, find_path_with};
pub use config::{Connectivity, SearchConfig};

#[cfg(test)]
mod astar_tests;
