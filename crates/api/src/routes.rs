use crate::handlers::{
    get_config, get_subtitle, get_subtitle_info, health_check, list_subtitles, AppState,
};
use axum::{routing::get, Router};

/// Endpoint table. Middleware layers and state are attached by the caller.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/subtitle/:video_id", get(get_subtitle))
        .route("/subtitle/:video_id/info", get(get_subtitle_info))
        .route("/list", get(list_subtitles))
        .route("/config", get(get_config))
}
