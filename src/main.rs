mod bootstrap;
mod cli;

use crate::bootstrap::{config, logging, router, server};
use crate::cli::Cli;
use subplus_api::AppState;
use subplus_events::{AppEvent, EventBus};
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.debug);

    let events = EventBus::new(false);
    events.emit(AppEvent::Starting);

    let config = config::load(&cli.config, cli.overrides(), &events).await?;
    let resolver = server::initialize_resolver(&config, &events).await?;

    let config = Arc::new(config);
    let formats = resolver.formats().to_vec();
    let app_state = AppState::new(Arc::new(resolver), Arc::clone(&config));
    let app = router::build(&config, app_state);

    let addr = config.bind_addr();
    let listener = server::bind(&addr).await?;

    events.emit(AppEvent::Ready {
        addr,
        formats,
    });

    let signal_events = Arc::clone(&events);
    let shutdown_signal = async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            signal_events.emit(AppEvent::Error {
                context: "Failed to install Ctrl+C handler".to_string(),
                error: e.to_string(),
            });
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received, initiating graceful shutdown...");
    };

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    events.emit(AppEvent::Shutdown);
    Ok(())
}
