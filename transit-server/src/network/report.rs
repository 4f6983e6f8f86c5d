//! Labelled distance/time records handed to report writers.

use std::collections::BTreeMap;

use serde::Serialize;

use super::units::Leg;

/// Marker used in place of a distance/time for an unusable network.
pub const NO_ROUTE: &str = "No valid path found";

/// One network's line in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NetworkEntry {
    Route { distance: String, time: String },
    NoRoute(String),
}

impl NetworkEntry {
    pub fn route(leg: &Leg) -> Self {
        NetworkEntry::Route {
            distance: format!("{} km", leg.distance_km),
            time: leg.time.to_string(),
        }
    }

    pub fn no_route() -> Self {
        NetworkEntry::NoRoute(NO_ROUTE.to_string())
    }
}

/// Per-network entries keyed by network label, plus the winning labels.
///
/// Serialises as a flat JSON object:
/// `{"<label>": {"distance": "172 km", "time": "2h 9min"}, ..., "time efficient": ["<label>"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkReport {
    #[serde(flatten)]
    pub networks: BTreeMap<String, NetworkEntry>,

    #[serde(rename = "time efficient")]
    pub time_efficient: Vec<String>,
}

impl NetworkReport {
    /// Fold another report in. Entries with the same label are replaced,
    /// winner lists are concatenated.
    pub fn merge(&mut self, other: NetworkReport) {
        self.networks.extend(other.networks);
        self.time_efficient.extend(other.time_efficient);
    }
}
