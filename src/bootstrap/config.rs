use subplus_events::{AppEvent, EventBus};
use subplus_config::{Config, ConfigOverrides};
use subplus_utils::absolutize;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Loads the config file, then applies command-line overrides. The result is
/// frozen for the lifetime of the process.
pub async fn load(config_path: &Path, overrides: ConfigOverrides, events: &Arc<EventBus>) -> Result<Config> {
    let abs_config_path = absolutize(config_path)?.display().to_string();

    events.emit(AppEvent::ConfigLoading {
        path: abs_config_path.clone(),
    });

    let config_exists = config_path.exists();
    let config = Config::from_file_with_events(config_path, Some(events))
        .await?
        .with_overrides(overrides);
    config.validate()?;

    if !config_exists {
        events.emit(AppEvent::ConfigCreated {
            path: abs_config_path,
        });
    }

    events.emit(AppEvent::ConfigLoaded {
        directories: config.subtitles.directories.len(),
        formats: config.subtitles.formats.len(),
    });

    Ok(config)
}
