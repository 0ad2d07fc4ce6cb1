use super::models::AppState;
use blog_site::{SiteRepository, SiteStore};
use blog_storage::StorageBackend;
use std::path::PathBuf;
use std::sync::Arc;

impl AppState {
    pub fn new(
        storage: Arc<dyn StorageBackend>,
        sites: Arc<dyn SiteRepository>,
        site_store: Arc<SiteStore>,
        base_url: String,
        uploads_root: PathBuf,
        default_directory: String,
        streaming_threshold_mb: u64,
    ) -> Self {
        Self {
            storage,
            sites,
            site_store,
            base_url: Arc::new(base_url),
            uploads_root: Arc::new(uploads_root),
            default_directory: Arc::new(default_directory),
            streaming_threshold_bytes: streaming_threshold_mb * 1024 * 1024,
        }
    }
}
