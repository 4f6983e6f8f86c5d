//! Web layer for the transit comparator.
//!
//! Provides HTTP endpoints for solving mazes and comparing transport modes
//! between registered cities.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
