use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use subplus_resolver::ResolveError;
use thiserror::Error;

use crate::models::{ErrorDetail, ErrorResponse};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid video ID: {0}")]
    InvalidVideoId(String),

    #[error("Subtitle not found: {video_id}")]
    SubtitleNotFound { video_id: String },

    #[error("Read failed: {0}")]
    ReadFailure(String),

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound { video_id } => ApiError::SubtitleNotFound { video_id },
            ResolveError::ReadFailure { .. } => ApiError::ReadFailure(err.to_string()),
            ResolveError::DecodeFailure { .. } => ApiError::UnsupportedEncoding(err.to_string()),
            ResolveError::TaskFailed(e) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, video_id) = match self {
            ApiError::InvalidVideoId(msg) => (
                StatusCode::BAD_REQUEST,
                "INVALID_VIDEO_ID",
                msg,
                None,
            ),
            ApiError::SubtitleNotFound { video_id } => (
                StatusCode::NOT_FOUND,
                "SUBTITLE_NOT_FOUND",
                format!("No subtitle file for '{}'", video_id),
                Some(video_id),
            ),
            ApiError::ReadFailure(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "READ_FAILED",
                msg,
                None,
            ),
            ApiError::UnsupportedEncoding(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UNSUPPORTED_ENCODING",
                msg,
                None,
            ),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg,
                None,
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                video_id,
            },
        };

        (status, Json(body)).into_response()
    }
}
