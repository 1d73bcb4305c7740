use crate::config::Config;
use crate::store::UrlStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: UrlStore,
    pub config: Arc<Config>,
}
