//! Named endpoint registry.
//!
//! Maps city names to grid positions. All networks share one coordinate
//! space, so a single registry serves rail and road alike.

mod error;
mod registry;

pub use error::CityError;
pub use registry::{City, CityRegistry};
