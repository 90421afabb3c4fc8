use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub subtitles: SubtitleSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "super::defaults::host")]
    pub host: String,
    #[serde(default = "super::defaults::port")]
    pub port: u16,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "super::defaults::enable_compression")]
    pub enable_compression: bool,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubtitleSettings {
    /// Search order: earlier directories win on duplicate identifiers
    #[serde(default = "super::defaults::directories")]
    pub directories: Vec<String>,
    /// Format priority: earlier suffixes win when several files match
    #[serde(default = "super::defaults::formats")]
    pub formats: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: super::defaults::host(),
            port: super::defaults::port(),
            timeout_secs: super::defaults::timeout_secs(),
            max_concurrent_requests: super::defaults::max_concurrent_requests(),
            enable_compression: super::defaults::enable_compression(),
            allowed_origins: super::defaults::allowed_origins(),
        }
    }
}

impl Default for SubtitleSettings {
    fn default() -> Self {
        Self {
            directories: super::defaults::directories(),
            formats: super::defaults::formats(),
        }
    }
}

impl Config {
    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn validate(&self) -> Result<(), super::ConfigError> {
        if self.server.port == 0 {
            return Err(super::ConfigError::InvalidConfig(
                "server.port cannot be 0".to_string(),
            ));
        }

        if self.subtitles.directories.iter().all(|d| d.trim().is_empty()) {
            return Err(super::ConfigError::InvalidConfig(
                "subtitles.directories must list at least one directory".to_string(),
            ));
        }

        if self.subtitles.formats.iter().all(|f| f.trim().trim_start_matches('.').is_empty()) {
            return Err(super::ConfigError::InvalidConfig(
                "subtitles.formats must list at least one suffix".to_string(),
            ));
        }

        Ok(())
    }
}
