use super::models::Config;

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub directories: Vec<String>,
    pub formats: Vec<String>,
}

impl Config {
    /// Applies command-line overrides. Non-empty lists replace the configured ones.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if !overrides.directories.is_empty() {
            self.subtitles.directories = overrides.directories;
        }
        if !overrides.formats.is_empty() {
            self.subtitles.formats = overrides.formats;
        }
        self
    }
}
