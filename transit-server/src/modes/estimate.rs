//! Per-vehicle cost estimates for the winning distances.
//!
//! Rate tables give, for each vehicle type, a set of `"<metric> per km"`
//! rates (emissions, energy, cost...). Units live beside the vehicle
//! families as `"<metric> unit"` keys:
//!
//! ```json
//! {
//!   "train": { "Intercity": { "CO2 per km": 0.011 } },
//!   "car":   { "Petrol car": { "CO2 per km": 0.17 } },
//!   "CO2 unit": "kg"
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::category::VehicleClass;
use super::select::ModeSelection;

const RATE_SUFFIX: &str = " per km";
const UNIT_SUFFIX: &str = " unit";

/// Errors reading or applying a rate table.
#[derive(Debug, thiserror::Error)]
pub enum RatesError {
    /// Failed to read the rates file.
    #[error("failed to read rates file: {0}")]
    Io(#[from] std::io::Error),

    /// The rates file is not valid JSON of the expected shape.
    #[error("invalid rates JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A metric has no `"<metric> unit"` entry.
    #[error("no unit configured for metric {metric:?}")]
    MissingUnit { metric: String },
}

type RateTable = BTreeMap<String, BTreeMap<String, f64>>;

/// Rates per kilometre for every vehicle type, grouped by vehicle family.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VehicleRates {
    #[serde(default)]
    pub train: RateTable,

    #[serde(default)]
    pub car: RateTable,

    /// `"<metric> unit"` → unit.
    #[serde(flatten)]
    pub units: BTreeMap<String, String>,
}

impl VehicleRates {
    pub fn parse(json: &str) -> Result<Self, RatesError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RatesError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    fn table(&self, class: VehicleClass) -> &RateTable {
        match class {
            VehicleClass::Train => &self.train,
            VehicleClass::Car => &self.car,
        }
    }

    fn unit(&self, metric: &str) -> Result<&str, RatesError> {
        self.units
            .get(&format!("{metric}{UNIT_SUFFIX}"))
            .map(String::as_str)
            .ok_or_else(|| RatesError::MissingUnit {
                metric: metric.to_string(),
            })
    }
}

/// One metric for a trip, e.g. `12.40 kg` of CO2.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

/// Estimated totals for one vehicle type over its category's distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub vehicle: String,
    pub class: VehicleClass,
    pub distance_km: i64,
    pub metrics: Vec<Metric>,
}

/// Multiply every rate by the winning distance of the matching category.
///
/// Vehicle families whose category failed are left out.
pub fn estimate_costs(
    rates: &VehicleRates,
    selection: &ModeSelection,
) -> Result<Vec<CostEstimate>, RatesError> {
    let mut estimates = Vec::new();

    for outcome in &selection.outcomes {
        let Ok(result) = &outcome.result else {
            continue;
        };
        let class = outcome.category.vehicle;

        for (vehicle, vehicle_rates) in rates.table(class) {
            let metrics = vehicle_rates
                .iter()
                .map(|(key, rate)| {
                    let name = key.strip_suffix(RATE_SUFFIX).unwrap_or(key);
                    Ok(Metric {
                        name: name.to_string(),
                        value: rate * result.distance_km as f64,
                        unit: rates.unit(name)?.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, RatesError>>()?;

            estimates.push(CostEstimate {
                vehicle: vehicle.clone(),
                class,
                distance_km: result.distance_km,
                metrics,
            });
        }
    }

    Ok(estimates)
}
