use super::models::{UploadForm, UploadedFile};
use crate::errors::ApiError;
use axum::extract::Multipart;

/// Reads the `file` and `directory` fields; unknown fields are skipped
pub async fn parse_upload_form(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "file" => {
                let name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await?;

                tracing::debug!(
                    "upload: received '{}' ({}, {} bytes)",
                    name,
                    content_type,
                    data.len()
                );

                form.file = Some(UploadedFile {
                    name,
                    content_type,
                    data,
                });
            }
            "directory" => {
                form.directory = Some(field.text().await?);
            }
            _ => {
                tracing::debug!("upload: ignoring field '{}'", field_name);
            }
        }
    }

    Ok(form)
}
