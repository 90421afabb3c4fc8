use super::models::AppState;
use super::validator::validate_video_id;
use crate::errors::ApiError;
use crate::models::{InfoResponse, SubtitleResponse};
use axum::{
    extract::{Path, State},
    response::Json,
};

pub async fn get_subtitle(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<SubtitleResponse>, ApiError> {
    tracing::info!("Subtitle requested: {}", video_id);
    validate_video_id(&video_id)?;

    let entry = state.resolver.resolve(&video_id).await?;
    let content = state.resolver.read_entry(&entry).await?;
    let info = state.resolver.describe_entry(&entry).await?;

    let encoding = content
        .encoding
        .is_fallback()
        .then(|| content.encoding.as_str().to_string());

    Ok(Json(SubtitleResponse {
        success: true,
        video_id,
        content: content.text,
        info,
        encoding,
    }))
}

pub async fn get_subtitle_info(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<InfoResponse>, ApiError> {
    validate_video_id(&video_id)?;

    let info = state.resolver.describe(&video_id).await?;

    Ok(Json(InfoResponse {
        success: true,
        info,
    }))
}
