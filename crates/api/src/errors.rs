use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response, Json},
};
use blog_site::SiteError;
use blog_storage::StorageError;
use thiserror::Error;

use crate::models::ErrorResponse;

const FALLBACK_MESSAGE: &str = "Upload failed";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("{0}")]
    MultipartError(#[from] MultipartError),

    #[error("{0}")]
    StorageError(#[from] StorageError),

    #[error("{0}")]
    SiteError(#[from] SiteError),

    #[error("{0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MultipartError(err) => err.status(),
            ApiError::StorageError(_) | ApiError::SiteError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            ApiError::NotFound => "Resource not found".to_string(),
            other => other.to_string(),
        };
        let message = if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_body() {
        let (status, body) = body_of(ApiError::BadRequest("No file provided".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "No file provided" }));
    }

    #[tokio::test]
    async fn test_storage_error_is_500_with_message() {
        let err = StorageError::UploadError("a/b.md".to_string(), "bucket gone".to_string());
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Upload failed for 'a/b.md': bucket gone");
    }

    #[tokio::test]
    async fn test_empty_message_falls_back() {
        let (status, body) = body_of(ApiError::InternalError(String::new())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], FALLBACK_MESSAGE);
    }
}
