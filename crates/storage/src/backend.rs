use crate::StorageError;
use blog_models::AssetKey;
use bytes::Bytes;

/// Storage backend trait for uploaded assets
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Persists `data` under `key`, returns the public URL
    async fn store(&self, key: &AssetKey, data: Bytes) -> Result<String, StorageError>;

    /// Get public URL for a key (without writing)
    fn get_url(&self, key: &AssetKey) -> String;

    /// Check if backend is local or remote
    fn is_remote(&self) -> bool;
}
