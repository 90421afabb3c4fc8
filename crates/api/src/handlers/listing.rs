use super::models::AppState;
use crate::errors::ApiError;
use crate::models::ListResponse;
use axum::{extract::State, response::Json};

pub async fn list_subtitles(State(state): State<AppState>) -> Result<Json<ListResponse>, ApiError> {
    let report = state.resolver.enumerate().await.map_err(|e| {
        tracing::error!("Failed to list subtitles: {}", e);
        ApiError::InternalError("Failed to list subtitle files".to_string())
    })?;

    for issue in &report.issues {
        tracing::warn!(
            "list: skipped {} ({}): {}",
            issue.directory.display(),
            issue.format.as_deref().unwrap_or("all formats"),
            issue.message
        );
    }

    Ok(Json(ListResponse {
        success: true,
        count: report.entries.len(),
        subtitles: report.entries,
        search_dirs: state.search_dirs(),
    }))
}
