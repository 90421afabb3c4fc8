use super::models::AppState;
use subplus_config::Config;
use subplus_resolver::Resolver;
use std::sync::Arc;

impl AppState {
    pub fn new(resolver: Arc<Resolver>, config: Arc<Config>) -> Self {
        Self { resolver, config }
    }

    /// Active search directories as display strings, in priority order
    pub(super) fn search_dirs(&self) -> Vec<String> {
        self.resolver
            .directories()
            .iter()
            .map(|d| d.path.display().to_string())
            .collect()
    }
}

