//! Transit mode comparison server.
//!
//! Finds shortest routes through grid-encoded transport networks and
//! answers: "between these two cities, is the train or the car faster,
//! and on which tier of the network?"

pub mod cache;
pub mod cities;
pub mod dataset;
pub mod grid;
pub mod modes;
pub mod network;
pub mod pathfinder;
pub mod web;
