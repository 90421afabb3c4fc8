use subplus_events::EventBus;
use subplus_config::Config;
use subplus_filesystem::DirectorySet;
use subplus_resolver::Resolver;
use anyhow::Result;
use std::sync::Arc;

/// Prepares the search directories and builds the resolver over them
pub async fn initialize_resolver(config: &Config, events: &Arc<EventBus>) -> Result<Resolver> {
    let directories = DirectorySet::initialize(&config.subtitles.directories, events).await?;

    let resolver = Resolver::new(directories, &config.subtitles.formats);
    tracing::debug!(
        "Resolver ready: {} directories, formats {:?}",
        resolver.directories().len(),
        resolver.formats()
    );

    Ok(resolver)
}

pub async fn bind(addr: &str) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            let port = addr.rsplit(':').next().unwrap_or("unknown");
            tracing::error!("❌ Port {} is already in use", port);
            tracing::error!("Another application is using this port");
            tracing::error!("Solutions:");
            tracing::error!("1. Stop the other application");
            tracing::error!("2. Pass --port or change [server].port in config.toml");
            #[cfg(target_os = "windows")]
            tracing::error!("3. Find process: netstat -ano | findstr :{}", port);
            #[cfg(not(target_os = "windows"))]
            tracing::error!("3. Find process: lsof -i :{}", port);
        } else {
            tracing::error!("❌ Failed to bind server on {}: {}", addr, e);
        }
        anyhow::anyhow!("Failed to bind server: {}", e)
    })
}
