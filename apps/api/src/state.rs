use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::editor::RecordStore;
use crate::storage::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Backing store for record slots and the saved style preference.
    pub store: Arc<dyn KeyValueStore>,
    /// The single editor session. Each request holds the lock for its whole edit.
    pub editor: Arc<Mutex<RecordStore>>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config,
            store,
            editor: Arc::new(Mutex::new(RecordStore::default())),
        }
    }
}
