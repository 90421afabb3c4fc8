use super::models::{AppEvent, EventBus};
use colored::Colorize;
use std::sync::Arc;

const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /health", "health check"),
    ("GET /subtitle/<video_id>", "subtitle content"),
    ("GET /subtitle/<video_id>/info", "subtitle metadata"),
    ("GET /list", "all available subtitles"),
    ("GET /config", "server configuration"),
];

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        // Console output is skipped in silent mode, log records are not
        if self.silent_mode {
            Self::log_only(&event);
            return;
        }

        match event {
            // Application lifecycle
            AppEvent::Starting => {
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "SubtitlePlus - Local Subtitle Server".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }
            AppEvent::Ready { addr, formats } => {
                println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
                println!("  {} {}", "Server ".white(), format!("http://{}", addr).cyan());
                println!("  {} {}", "Formats".white(), formats.join(", ").blue());
                for (route, description) in ENDPOINTS {
                    println!("  {} {}", format!("{:<30}", route).dimmed(), description);
                }
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
            }
            AppEvent::Shutdown => {
                println!("\n{}", "Server shutting down".red());
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                println!("  {} {}", "Loading config".dimmed(), path.cyan());
            }
            AppEvent::ConfigLoaded { directories, formats } => {
                println!(
                    "  {} {} director{}, {} format(s)",
                    "✓".green(),
                    directories.to_string().cyan(),
                    if directories == 1 { "y" } else { "ies" },
                    formats.to_string().cyan()
                );
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    println!("  {} Config updated: {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    );
                }
            }

            // Search directories
            AppEvent::DirectoryReady { path, priority } => {
                println!("  {} [{}] {}", "✓".green(), priority.to_string().cyan(), path);
            }
            AppEvent::DirectoryDuplicate { path } => {
                println!("  {} Duplicate directory ignored: {}", "⚠".yellow(), path.dimmed());
            }
            AppEvent::DirectoryUnavailable { path, error } => {
                println!("  {} Unavailable: {}", "✗".red(), path.cyan());
                tracing::warn!("Subtitle directory '{}' is unavailable: {}", path, error);
            }
            AppEvent::AllDirectoriesInitialized { active } => {
                if active == 0 {
                    println!("  {} No usable subtitle directories", "⚠".yellow());
                }
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }

    fn log_only(event: &AppEvent) {
        match event {
            AppEvent::DirectoryUnavailable { path, error } => {
                tracing::warn!("Subtitle directory '{}' is unavailable: {}", path, error);
            }
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
            other => tracing::debug!("{:?}", other),
        }
    }
}
