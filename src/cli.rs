use clap::Parser;
use std::path::PathBuf;
use subplus_config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(name = "subplus-server")]
#[command(version, about = "Serves local subtitle files by video ID")]
pub struct Cli {
    /// Path to the TOML config file (created with defaults if missing)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Subtitle directory, highest priority first. Repeat to search several;
    /// replaces the configured list.
    #[arg(long = "subtitle-dir", value_name = "DIR")]
    pub subtitle_dirs: Vec<String>,

    /// Accepted subtitle suffix, preferred first. Repeatable.
    #[arg(long = "format", value_name = "SUFFIX")]
    pub formats: Vec<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            directories: self.subtitle_dirs.clone(),
            formats: self.formats.clone(),
        }
    }
}
