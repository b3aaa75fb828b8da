//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedStationClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Cached upstream station list
    pub stations: Arc<CachedStationClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: CachedStationClient) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }
}
