use crate::remote::{ObjectClient, PutReceipt};
use crate::StorageError;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::{primitives::ByteStream, Client};
use blog_config::StorageConfig;
use bytes::Bytes;

/// S3-compatible put-object client.
/// Pointed at Aliyun OSS (`https://{region}.aliyuncs.com`) by default.
pub struct S3ObjectClient {
    client: Client,
    bucket_name: String,
}

impl S3ObjectClient {
    pub async fn new(
        endpoint_url: String,
        region: String,
        access_key_id: String,
        secret_access_key: String,
        bucket_name: String,
    ) -> Result<Self, StorageError> {
        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "blog-oss",
        );

        let config = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(region))
            .endpoint_url(endpoint_url)
            .load()
            .await;

        let client = Client::new(&config);

        Ok(Self {
            client,
            bucket_name,
        })
    }

    /// Builds a client for the OSS endpoint of the configured region
    pub async fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let (Some(region), Some(access_key_id), Some(secret), Some(bucket)) = (
            config.region.clone(),
            config.access_key_id.clone(),
            config.access_key_secret.clone(),
            config.bucket.clone(),
        ) else {
            return Err(StorageError::ConfigError(format!(
                "missing {}",
                config.missing_fields().join(", ")
            )));
        };

        let endpoint_url = format!("https://{}.aliyuncs.com", region);
        Self::new(endpoint_url, region, access_key_id, secret, bucket).await
    }
}

#[async_trait::async_trait]
impl ObjectClient for S3ObjectClient {
    async fn put_object(&self, key: &str, body: Bytes) -> Result<PutReceipt, StorageError> {
        tracing::debug!("Uploading {} to S3 bucket {}", key, self.bucket_name);

        let output = self
            .client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError::UploadError(key.to_string(), e.to_string()))?;

        Ok(PutReceipt {
            key: key.to_string(),
            etag: output.e_tag().map(str::to_string),
        })
    }
}
