//! Transport mode selection.
//!
//! Each transport category (rail, road) owns a nested network pair. The
//! selector runs the comparison for every category in a fixed table and
//! reports the fastest option overall, plus per-vehicle cost estimates for
//! the winning distances.

mod category;
mod estimate;
mod select;

pub use category::{CATEGORIES, Category, CategoryHandler, Tier, TransportNetworks, VehicleClass};
pub use estimate::{CostEstimate, Metric, RatesError, VehicleRates, estimate_costs};
pub use select::{CategoryOutcome, ModeSelection, select_mode};
