use blog_events::{AppEvent, EventBus};
use blog_config::{Config, StorageConfig};
use blog_storage::{LocalBackend, StorageBackend};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

const LOCAL_URL_PREFIX: &str = "/uploads";

/// Picks the upload backend once at startup: object storage when every
/// credential is present, the local uploads tree otherwise
pub async fn initialize(
    config: &Config,
    storage_config: &StorageConfig,
    uploads_root: PathBuf,
    events: &Arc<EventBus>,
) -> Result<Arc<dyn StorageBackend>> {
    let missing = storage_config.missing_fields();
    if !missing.is_empty() {
        events.emit(AppEvent::StorageFallback {
            missing: missing.iter().map(|name| name.to_string()).collect(),
        });
        return Ok(local(uploads_root));
    }

    remote(config, storage_config, uploads_root, events).await
}

fn local(uploads_root: PathBuf) -> Arc<dyn StorageBackend> {
    Arc::new(LocalBackend::new(uploads_root, LOCAL_URL_PREFIX))
}

#[cfg(feature = "s3")]
async fn remote(
    config: &Config,
    storage_config: &StorageConfig,
    _uploads_root: PathBuf,
    events: &Arc<EventBus>,
) -> Result<Arc<dyn StorageBackend>> {
    use blog_storage::{RemoteBackend, RetryPolicy, S3ObjectClient};

    let client = S3ObjectClient::from_config(storage_config).await?;
    let retry = RetryPolicy::from(&config.uploads.retry);
    let backend = RemoteBackend::from_config(client, storage_config, retry)?;

    events.emit(AppEvent::RemoteStorageEnabled {
        bucket: backend.bucket().to_string(),
        region: backend.region().to_string(),
    });

    Ok(Arc::new(backend))
}

#[cfg(not(feature = "s3"))]
async fn remote(
    _config: &Config,
    _storage_config: &StorageConfig,
    uploads_root: PathBuf,
    _events: &Arc<EventBus>,
) -> Result<Arc<dyn StorageBackend>> {
    tracing::warn!(
        "Object storage is configured but this build lacks the `s3` feature, using local file storage"
    );
    Ok(local(uploads_root))
}
