use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid site document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    RenderError(#[from] askama::Error),
}
