//! The table of transport categories.

use serde::Serialize;

use crate::grid::Position;
use crate::network::{
    CompareError, ComparisonResult, NetworkPair, NetworkProfile, TravelConfig, compare_networks,
};

/// A network pair together with the speeds of its two networks.
#[derive(Debug, Clone)]
pub struct Tier {
    pub pair: NetworkPair,
    pub slow: NetworkProfile,
    pub fast: NetworkProfile,
}

impl Tier {
    pub fn new(pair: NetworkPair, slow: NetworkProfile, fast: NetworkProfile) -> Self {
        Self { pair, slow, fast }
    }

    pub fn compare(
        &self,
        start: Position,
        end: Position,
        config: &TravelConfig,
    ) -> Result<ComparisonResult, CompareError> {
        compare_networks(&self.pair, start, end, &self.slow, &self.fast, config)
    }
}

/// Every network the selector can choose from.
#[derive(Debug, Clone)]
pub struct TransportNetworks {
    /// Regional rail containing intercity rail.
    pub rail: Tier,

    /// Main roads containing highways.
    pub road: Tier,
}

/// Vehicle family whose rate table applies to a category's distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Train,
    Car,
}

/// Runs one category's comparison.
pub type CategoryHandler =
    fn(&TransportNetworks, Position, Position, &TravelConfig) -> Result<ComparisonResult, CompareError>;

/// One row of the category table.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub label: &'static str,
    pub description: &'static str,
    pub vehicle: VehicleClass,
    pub handler: CategoryHandler,
}

impl Category {
    pub fn run(
        &self,
        networks: &TransportNetworks,
        start: Position,
        end: Position,
        config: &TravelConfig,
    ) -> Result<ComparisonResult, CompareError> {
        (self.handler)(networks, start, end, config)
    }
}

fn compare_rail(
    networks: &TransportNetworks,
    start: Position,
    end: Position,
    config: &TravelConfig,
) -> Result<ComparisonResult, CompareError> {
    networks.rail.compare(start, end, config)
}

fn compare_road(
    networks: &TransportNetworks,
    start: Position,
    end: Position,
    config: &TravelConfig,
) -> Result<ComparisonResult, CompareError> {
    networks.road.compare(start, end, config)
}

/// Categories in selection order. Earlier entries win ties.
pub const CATEGORIES: [Category; 2] = [
    Category {
        label: "Train",
        description: "Regional train lines versus intercity train lines",
        vehicle: VehicleClass::Train,
        handler: compare_rail,
    },
    Category {
        label: "Car",
        description: "Main roads versus highways",
        vehicle: VehicleClass::Car,
        handler: compare_road,
    },
];
