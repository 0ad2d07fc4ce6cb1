use blog_site::{SiteRepository, SiteStore};
use blog_storage::StorageBackend;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) storage: Arc<dyn StorageBackend>,
    pub(super) sites: Arc<dyn SiteRepository>,
    pub(super) site_store: Arc<SiteStore>,
    pub(super) base_url: Arc<String>,
    pub(super) uploads_root: Arc<PathBuf>,
    pub(super) default_directory: Arc<String>,
    pub(super) streaming_threshold_bytes: u64,
}
