//! Speeds and unit scaling.

use serde::{Deserialize, Serialize};

use crate::pathfinder::SearchConfig;

/// Grid distance → kilometres factor for the reference maps.
pub const DISTANCE_SCALE_FACTOR: f64 = 1.7241;

/// A named network with its average travel speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Human-readable network name, used as the label in reports.
    pub label: String,

    /// Average speed in km/h.
    pub speed_kmh: f64,
}

impl NetworkProfile {
    pub fn new(label: impl Into<String>, speed_kmh: f64) -> Self {
        Self {
            label: label.into(),
            speed_kmh,
        }
    }

    /// Regional rail lines, 80 km/h.
    pub fn regional_rail() -> Self {
        Self::new("Regional Train Lines", 80.0)
    }

    /// Intercity and interregio rail lines, 140 km/h.
    pub fn intercity_rail() -> Self {
        Self::new("Intercity Train Lines", 140.0)
    }

    /// Main roads, 80 km/h.
    pub fn main_road() -> Self {
        Self::new("Main Roads", 80.0)
    }

    /// Highways, 120 km/h.
    pub fn highway() -> Self {
        Self::new("Highways", 120.0)
    }
}

/// Configuration shared by every comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelConfig {
    /// Kilometres per unit of grid distance.
    pub distance_scale: f64,

    /// Search settings used on both networks.
    pub search: SearchConfig,
}

impl TravelConfig {
    pub fn new(distance_scale: f64, search: SearchConfig) -> Self {
        Self {
            distance_scale,
            search,
        }
    }
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            distance_scale: DISTANCE_SCALE_FACTOR,
            search: SearchConfig::default(),
        }
    }
}
