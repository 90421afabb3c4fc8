mod models;
mod defaults;
mod loader;
mod migration;
mod overrides;
mod errors;

pub use models::*;
pub use overrides::ConfigOverrides;
pub use errors::ConfigError;
pub use defaults::DEFAULT_CONFIG_TEMPLATE;
