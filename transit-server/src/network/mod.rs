//! Two-tier network comparison.
//!
//! A network pair is a slow, dense network that physically contains a
//! faster, sparser one (regional rail around intercity lines, main roads
//! around highways). Comparing the pair answers which of the two gets a
//! traveller between two points sooner, crediting the slow network's
//! route with fast-network speed wherever it runs on fast-network cells.

mod compare;
mod config;
mod error;
mod overlap;
mod pair;
mod report;
mod units;

pub use compare::{ComparisonResult, FastRoute, NetworkKind, SlowRoute, Unusable, compare_networks};
pub use config::{NetworkProfile, TravelConfig};
pub use error::{CompareError, NetworkError};
pub use overlap::Overlap;
pub use pair::NetworkPair;
pub use report::{NO_ROUTE, NetworkEntry, NetworkReport};
pub use units::{Leg, TravelTime};
