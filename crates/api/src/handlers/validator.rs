use crate::errors::ApiError;

/// Validates a client-supplied relative path (upload directory or served
/// file) so it cannot escape the uploads tree
pub fn validate_relative_path(path: &str) -> Result<(), ApiError> {
    // Check for path traversal attempts
    if path.contains("..") {
        return Err(ApiError::InvalidPath(
            "Path contains '..' (path traversal attempt)".to_string()
        ));
    }

    // Check for null bytes
    if path.contains('\0') {
        return Err(ApiError::InvalidPath(
            "Path contains null byte".to_string()
        ));
    }

    // Check for absolute paths
    if path.starts_with('/') {
        return Err(ApiError::InvalidPath(
            "Absolute paths are not allowed".to_string()
        ));
    }

    // Backslashes are separators on Windows
    if path.contains('\\') {
        return Err(ApiError::InvalidPath(
            "Backslashes are not allowed".to_string()
        ));
    }

    // Check for Windows drive letters (C:, D:, etc.)
    if path.len() >= 2 && path.chars().nth(1) == Some(':') {
        return Err(ApiError::InvalidPath(
            "Drive letters are not allowed".to_string()
        ));
    }

    Ok(())
}
