use bytes::Bytes;

/// Fields of one upload form submission
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub directory: Option<String>,
}

#[derive(Debug)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: String,
    pub data: Bytes,
}
