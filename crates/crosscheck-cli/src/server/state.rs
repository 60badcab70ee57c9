//! Application state for the web server.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use crosscheck::TableStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Both canonical tables. Writers take the lock for a whole-table
    /// replace, so concurrent uploads resolve as last write wins.
    pub store: Arc<RwLock<TableStore>>,
    /// When the server started (for health reporting).
    pub started_at: Instant,
}

impl AppState {
    /// Create new application state around a store.
    pub fn new(store: TableStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TableStore::new())
    }
}
