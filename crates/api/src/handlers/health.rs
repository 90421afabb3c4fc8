use super::models::AppState;
use crate::models::HealthResponse;
use axum::{extract::State, response::Json};

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "SubtitlePlus Server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        search_dirs: state.search_dirs(),
        supported_formats: state.resolver.formats().to_vec(),
    })
}
