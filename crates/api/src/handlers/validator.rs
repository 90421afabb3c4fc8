use crate::errors::ApiError;

const MIN_VIDEO_ID_LEN: usize = 5;

/// Validates a video ID before it is joined into a filesystem path
pub fn validate_video_id(video_id: &str) -> Result<(), ApiError> {
    if video_id.chars().count() < MIN_VIDEO_ID_LEN {
        return Err(ApiError::InvalidVideoId(format!(
            "Video ID must be at least {} characters",
            MIN_VIDEO_ID_LEN
        )));
    }

    // Check for path traversal attempts
    if video_id.contains("..") {
        return Err(ApiError::InvalidVideoId(
            "Video ID contains '..' (path traversal attempt)".to_string()
        ));
    }

    if video_id.contains(['/', '\\']) {
        return Err(ApiError::InvalidVideoId(
            "Video ID contains a path separator".to_string()
        ));
    }

    if video_id.contains('\0') {
        return Err(ApiError::InvalidVideoId(
            "Video ID contains null byte".to_string()
        ));
    }

    Ok(())
}
