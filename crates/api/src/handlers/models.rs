use subplus_config::Config;
use subplus_resolver::Resolver;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) resolver: Arc<Resolver>,
    pub(super) config: Arc<Config>,
}
