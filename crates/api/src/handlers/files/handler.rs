use super::disk;
use crate::errors::ApiError;
use crate::handlers::models::AppState;
use crate::handlers::validator::validate_relative_path;
use axum::{
    extract::{Path as AxumPath, State},
    response::Response,
};

/// Serves a locally stored upload at `/uploads/{category}/{directory}/{file}`
pub async fn serve_upload(
    State(state): State<AppState>,
    AxumPath(requested_path): AxumPath<String>,
) -> Result<Response, ApiError> {
    let requested_path = requested_path.trim_start_matches('/');
    tracing::debug!("serve_upload: requested_path = '{}'", requested_path);

    if requested_path.is_empty() {
        return Err(ApiError::NotFound);
    }
    validate_relative_path(requested_path)?;

    let full_path = state.uploads_root.join(requested_path);
    disk::serve_from_disk(full_path, state.streaming_threshold_bytes).await
}
