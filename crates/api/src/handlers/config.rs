use super::models::AppState;
use crate::models::{ConfigResponse, ConfigSnapshot};
use axum::{extract::State, response::Json};

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        success: true,
        config: ConfigSnapshot {
            search_dirs: state.search_dirs(),
            supported_formats: state.resolver.formats().to_vec(),
            server_host: state.config.server.host.clone(),
            server_port: state.config.server.port,
        },
    })
}
