//! Caching layer for mode selections.
//!
//! The networks are fixed once loaded, so a selection between two cities
//! never changes. Entries still expire so memory stays bounded on a
//! long-running server.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::cities::CityError;
use crate::dataset::Dataset;
use crate::modes::{CATEGORIES, CategoryOutcome, ModeSelection};
use crate::network::TravelConfig;

/// Cache key: (departure city, arrival city).
type RouteKey = (String, String);

/// Cached selection entry.
type SelectionEntry = Arc<ModeSelection>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Cache for mode selections.
pub struct ComparisonCache {
    selections: MokaCache<RouteKey, SelectionEntry>,
}

impl ComparisonCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let selections = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { selections }
    }

    pub async fn get(&self, from: &str, to: &str) -> Option<SelectionEntry> {
        self.selections
            .get(&(from.to_string(), to.to_string()))
            .await
    }

    pub async fn insert(&self, from: &str, to: &str, entry: SelectionEntry) {
        self.selections
            .insert((from.to_string(), to.to_string()), entry)
            .await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.selections.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.selections.invalidate_all();
    }
}

/// Errors producing a selection between two named cities.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error(transparent)]
    City(#[from] CityError),

    /// A category worker panicked or was cancelled.
    #[error("comparison worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Mode selector over a loaded dataset, with caching.
///
/// Each category runs on its own blocking worker over the shared grids.
pub struct CachedSelector {
    dataset: Arc<Dataset>,
    config: Arc<TravelConfig>,
    cache: ComparisonCache,
}

impl CachedSelector {
    pub fn new(dataset: Arc<Dataset>, config: TravelConfig, cache_config: &CacheConfig) -> Self {
        Self {
            dataset,
            config: Arc::new(config),
            cache: ComparisonCache::new(cache_config),
        }
    }

    /// The dataset comparisons run over.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &TravelConfig {
        &self.config
    }

    /// Select the fastest mode between two cities, using cache if available.
    pub async fn select(&self, from: &str, to: &str) -> Result<SelectionEntry, SelectError> {
        let (start, end) = self.dataset.cities.resolve(from, to)?;

        if let Some(cached) = self.cache.get(from, to).await {
            debug!(from, to, "selection cache hit");
            return Ok(cached);
        }

        let workers = CATEGORIES.iter().map(|category| {
            let category = *category;
            let dataset = Arc::clone(&self.dataset);
            let config = Arc::clone(&self.config);
            tokio::task::spawn_blocking(move || CategoryOutcome {
                category,
                result: category.run(&dataset.networks, start, end, &config),
            })
        });

        let outcomes = join_all(workers)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let entry = Arc::new(ModeSelection::from_outcomes(outcomes));
        self.cache.insert(from, to, entry.clone()).await;

        Ok(entry)
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
