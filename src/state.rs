use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::TalkerStore;

/// Shared handles for handlers and middleware
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<TalkerStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = TalkerStore::new(config.storage.talker_file.clone());
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
