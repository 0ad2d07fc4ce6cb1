use super::models::UploadedFile;
use crate::errors::ApiError;
use crate::handlers::validator::validate_relative_path;

const ALLOWED_TYPE_PREFIXES: [&str; 4] = ["text/markdown", "text/plain", "image/", "video/"];

/// Accepts markdown, plain text, images and videos. A `.md` name is
/// enough on its own, whatever type the client declared.
pub fn validate_file_type(file: &UploadedFile) -> Result<(), ApiError> {
    let allowed = ALLOWED_TYPE_PREFIXES
        .iter()
        .any(|prefix| file.content_type.starts_with(prefix))
        || file.name.ends_with(".md");

    if allowed {
        Ok(())
    } else {
        Err(ApiError::BadRequest(
            "Only markdown, image and video files are allowed".to_string(),
        ))
    }
}

/// Lowercased text after the last '.' of the original name
pub fn file_extension(name: &str) -> Result<String, ApiError> {
    match name.rsplit_once('.') {
        Some((_, extension))
            if !extension.is_empty() && extension.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            Ok(extension.to_ascii_lowercase())
        }
        _ => Err(ApiError::BadRequest("Invalid file extension".to_string())),
    }
}

/// Target directory: the submitted one, or `default` when absent or empty
pub fn resolve_directory(directory: Option<String>, default: &str) -> Result<String, ApiError> {
    let directory = directory
        .map(|d| d.trim().trim_end_matches('/').to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| default.to_string());

    validate_relative_path(&directory)?;
    Ok(directory)
}
