use crate::errors::ApiError;
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use tokio_util::io::ReaderStream;

/// Serves an uploaded file, streaming it when it is larger than the
/// configured threshold (`server.streaming_threshold_mb`)
pub async fn serve_from_disk(full_path: PathBuf, streaming_threshold_bytes: u64) -> Result<Response, ApiError> {
    let metadata = match tokio::fs::metadata(&full_path).await {
        Ok(metadata) if metadata.is_file() => metadata,
        Ok(_) => return Err(ApiError::NotFound),
        Err(e) => {
            tracing::debug!("serve_upload: '{}' unavailable: {}", full_path.display(), e);
            return Err(ApiError::NotFound);
        }
    };

    let mime_type = mime_guess::from_path(&full_path)
        .first_or_octet_stream()
        .to_string();

    if metadata.len() > streaming_threshold_bytes {
        stream_file(full_path, mime_type, metadata.len()).await
    } else {
        read_file(full_path, mime_type).await
    }
}

async fn stream_file(full_path: PathBuf, mime_type: String, file_size: u64) -> Result<Response, ApiError> {
    tracing::debug!(
        "serve_upload: streaming {} ({:.2} MB)",
        full_path.display(),
        file_size as f64 / 1024.0 / 1024.0
    );

    let file = tokio::fs::File::open(&full_path).await.map_err(|e| {
        tracing::error!("serve_upload: failed to open '{}': {}", full_path.display(), e);
        ApiError::NotFound
    })?;

    let body = Body::from_stream(ReaderStream::new(file));

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, mime_type)], body).into_response())
}

async fn read_file(full_path: PathBuf, mime_type: String) -> Result<Response, ApiError> {
    let content = tokio::fs::read(&full_path).await.map_err(|e| {
        tracing::error!("serve_upload: failed to read '{}': {}", full_path.display(), e);
        ApiError::NotFound
    })?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, mime_type)], content).into_response())
}
