//! On-disk network data.
//!
//! A data directory holds four network grids as CSV, the city registry
//! and the vehicle rate table. Loading builds both network tiers and
//! checks that every city is usable on both slow networks.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cities::{CityError, CityRegistry};
use crate::grid::{Grid, GridLoadError};
use crate::modes::{RatesError, Tier, TransportNetworks, VehicleRates};
use crate::network::{NetworkError, NetworkPair, NetworkProfile};

/// Location of the data files.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
    pub rail_file: String,
    pub intercity_file: String,
    pub road_file: String,
    pub highway_file: String,
    pub cities_file: String,
    pub rates_file: String,
}

impl DatasetConfig {
    /// Default file names under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            rail_file: "railnetwork.csv".to_string(),
            intercity_file: "intercity-interregio-network.csv".to_string(),
            road_file: "roadnetwork.csv".to_string(),
            highway_file: "highway-network.csv".to_string(),
            cities_file: "cities.json".to_string(),
            rates_file: "rates_per_vehicle.json".to_string(),
        }
    }
}

/// Errors loading a data directory.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to load grid {path}: {source}")]
    Grid {
        path: PathBuf,
        #[source]
        source: GridLoadError,
    },

    #[error("invalid {label} network pair: {source}")]
    Network {
        label: &'static str,
        #[source]
        source: NetworkError,
    },

    #[error(transparent)]
    City(#[from] CityError),

    #[error(transparent)]
    Rates(#[from] RatesError),
}

/// Everything the server needs to answer comparisons.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub networks: TransportNetworks,
    pub cities: CityRegistry,
    pub rates: VehicleRates,
}

impl Dataset {
    /// Load every file named by `config`.
    pub fn load(config: &DatasetConfig) -> Result<Self, DatasetError> {
        let rail = load_pair(
            "rail",
            &config.path(&config.rail_file),
            &config.path(&config.intercity_file),
        )?;
        let road = load_pair(
            "road",
            &config.path(&config.road_file),
            &config.path(&config.highway_file),
        )?;

        let networks = TransportNetworks {
            rail: Tier::new(
                rail,
                NetworkProfile::regional_rail(),
                NetworkProfile::intercity_rail(),
            ),
            road: Tier::new(road, NetworkProfile::main_road(), NetworkProfile::highway()),
        };

        let cities = CityRegistry::load(config.path(&config.cities_file))?;
        for tier in [&networks.rail, &networks.road] {
            for city in cities.validate(tier.pair.slow()) {
                warn!(
                    city = %city.name,
                    position = %city.position,
                    network = %tier.slow.label,
                    "city is not on the network"
                );
            }
        }

        let rates = VehicleRates::load(config.path(&config.rates_file))?;

        info!(
            dir = %config.data_dir.display(),
            cities = cities.len(),
            width = networks.rail.pair.slow().width(),
            height = networks.rail.pair.slow().height(),
            "dataset loaded"
        );

        Ok(Self {
            networks,
            cities,
            rates,
        })
    }
}

fn load_grid(path: &Path) -> Result<Grid, DatasetError> {
    Grid::load_csv(path).map_err(|source| DatasetError::Grid {
        path: path.to_path_buf(),
        source,
    })
}

fn load_pair(label: &'static str, slow: &Path, fast: &Path) -> Result<NetworkPair, DatasetError> {
    NetworkPair::new(load_grid(slow)?, load_grid(fast)?)
        .map_err(|source| DatasetError::Network { label, source })
}
