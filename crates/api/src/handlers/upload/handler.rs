use super::{parser, validator};
use crate::errors::ApiError;
use crate::handlers::models::AppState;
use crate::models::UploadResponse;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Json,
};
use blog_models::{AssetCategory, AssetKey, StoredAsset};

/// `POST /api/upload`: validates the submitted file, files it under its
/// category and directory, and hands the bytes to the configured backend
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let multipart = multipart.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let form = parser::parse_upload_form(multipart).await?;

    let file = form
        .file
        .ok_or_else(|| ApiError::BadRequest("No file provided".to_string()))?;
    validator::validate_file_type(&file)?;
    let extension = validator::file_extension(&file.name)?;
    let directory = validator::resolve_directory(form.directory, &state.default_directory)?;

    let category = AssetCategory::from_mime(&file.content_type);
    let key = AssetKey::generate(category, directory, extension);

    let url = state.storage.store(&key, file.data).await?;
    let asset = StoredAsset::new(key, url);

    tracing::debug!(
        "upload: '{}' stored as {} ({}, remote: {})",
        file.name,
        asset.id,
        asset.category,
        state.storage.is_remote()
    );

    Ok(Json(UploadResponse { url: asset.url }))
}
