use crate::backend::StorageBackend;
use crate::retry::RetryPolicy;
use crate::StorageError;
use blog_config::StorageConfig;
use blog_models::AssetKey;
use bytes::Bytes;

/// Result descriptor of a successful object write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutReceipt {
    pub key: String,
    pub etag: Option<String>,
}

/// Minimal put-object capability of an object store
#[async_trait::async_trait]
pub trait ObjectClient: Send + Sync {
    async fn put_object(&self, key: &str, body: Bytes) -> Result<PutReceipt, StorageError>;
}

/// Object storage backend (Aliyun OSS addressing) with bounded retry
pub struct RemoteBackend<C> {
    client: C,
    bucket: String,
    region: String,
    base_path: String,
    retry: RetryPolicy,
}

impl<C: ObjectClient> RemoteBackend<C> {
    pub fn new(
        client: C,
        bucket: String,
        region: String,
        base_path: String,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            client,
            bucket,
            region,
            base_path,
            retry,
        }
    }

    pub fn from_config(
        client: C,
        config: &StorageConfig,
        retry: RetryPolicy,
    ) -> Result<Self, StorageError> {
        let missing = config.missing_fields();
        if !missing.is_empty() {
            return Err(StorageError::ConfigError(format!(
                "missing {}",
                missing.join(", ")
            )));
        }

        Ok(Self::new(
            client,
            config.bucket.clone().unwrap_or_default(),
            config.region.clone().unwrap_or_default(),
            config.base_path.clone(),
            retry,
        ))
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Writes `data` under `object_key`, retrying per the backend's policy
    pub async fn put_with_retry(&self, object_key: &str, data: Bytes) -> Result<PutReceipt, StorageError> {
        let label = format!("Object storage write of {}", object_key);
        self.retry
            .run(&label, |_| self.client.put_object(object_key, data.clone()))
            .await
    }
}

#[async_trait::async_trait]
impl<C: ObjectClient + 'static> StorageBackend for RemoteBackend<C> {
    async fn store(&self, key: &AssetKey, data: Bytes) -> Result<String, StorageError> {
        let object_key = key.object_key(&self.base_path);

        tracing::debug!("Uploading {} to bucket {}", object_key, self.bucket);
        let receipt = self.put_with_retry(&object_key, data).await?;

        let url = self.get_url(key);
        tracing::info!(
            "Stored upload in object storage: {} (key {}, etag {:?})",
            url,
            receipt.key,
            receipt.etag
        );

        Ok(url)
    }

    fn get_url(&self, key: &AssetKey) -> String {
        format!(
            "https://{}.{}.aliyuncs.com/{}",
            self.bucket,
            self.region,
            key.object_key(&self.base_path)
        )
    }

    fn is_remote(&self) -> bool {
        true
    }
}
