use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String, formats: Vec<String> },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { directories: usize, formats: usize },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },

    // Search directories
    DirectoryReady { path: String, priority: usize },
    DirectoryDuplicate { path: String },
    DirectoryUnavailable { path: String, error: String },
    AllDirectoriesInitialized { active: usize },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
