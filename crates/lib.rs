// Re-export all public APIs from the workspace crates

pub use subplus_models::*;
pub use subplus_events::*;
pub use subplus_utils::*;
pub use subplus_filesystem::*;
pub use subplus_config::*;
pub use subplus_resolver::*;
pub use subplus_api::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Core models
    pub use subplus_models::{ResolvedEntry, SearchDirectory, SubtitleContent, SubtitleInfo, TextEncoding};

    // Events
    pub use subplus_events::{AppEvent, EventBus};

    // Configuration
    pub use subplus_config::{Config, ConfigOverrides};

    // Lookup
    pub use subplus_filesystem::DirectorySet;
    pub use subplus_resolver::{Resolver, ResolveError};

    // HTTP
    pub use subplus_api::{routes, AppState};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_error_types_resolve_through_root() {
        let api = crate::ApiError::InvalidVideoId("abc".to_string());
        let utils = crate::UtilsError::PathError("bad".to_string());
        let resolve = crate::ResolveError::NotFound {
            video_id: "abcde".to_string(),
        };

        assert!(!api.to_string().is_empty());
        assert!(!utils.to_string().is_empty());
        assert!(resolve.is_not_found());
        assert!(crate::expand_path("/tmp").is_ok());
    }
}
