//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedSelector};
use crate::dataset::Dataset;
use crate::network::TravelConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached mode selector over the loaded networks
    pub selector: Arc<CachedSelector>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(dataset: Dataset, config: TravelConfig, cache_config: &CacheConfig) -> Self {
        Self {
            selector: Arc::new(CachedSelector::new(
                Arc::new(dataset),
                config,
                cache_config,
            )),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        self.selector.dataset()
    }
}
