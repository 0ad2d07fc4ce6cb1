use crate::backend::StorageBackend;
use crate::StorageError;
use blog_filesystem::FileSystem;
use blog_models::AssetKey;
use bytes::Bytes;
use std::path::PathBuf;

/// Local filesystem storage backend.
/// Files land in `{root}/{category}/{directory}/{id}.{ext}` and are served
/// back under `{url_prefix}/...`.
pub struct LocalBackend {
    root: PathBuf,
    url_prefix: String,
}

impl LocalBackend {
    pub fn new(root: PathBuf, url_prefix: impl Into<String>) -> Self {
        let url_prefix = url_prefix.into().trim_end_matches('/').to_string();
        Self { root, url_prefix }
    }

    fn target_path(&self, key: &AssetKey) -> PathBuf {
        self.root.join(key.category.as_str()).join(&key.directory)
    }
}

#[async_trait::async_trait]
impl StorageBackend for LocalBackend {
    async fn store(&self, key: &AssetKey, data: Bytes) -> Result<String, StorageError> {
        let dir = self.target_path(key);
        FileSystem::ensure_directory(&dir).await?;

        let file_path = dir.join(key.file_name());
        FileSystem::write_file(&file_path, &data).await?;

        let url = self.get_url(key);
        tracing::info!("Stored upload locally: {}", url);

        Ok(url)
    }

    fn get_url(&self, key: &AssetKey) -> String {
        format!("{}/{}", self.url_prefix, key.relative_path())
    }

    fn is_remote(&self) -> bool {
        false
    }
}
