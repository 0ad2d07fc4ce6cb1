use crate::SiteError;
use blog_models::SiteConfig;
use serde_json::Value;
use std::path::PathBuf;

/// Read access to the `sites` collection
#[async_trait::async_trait]
pub trait SiteRepository: Send + Sync {
    /// First document of the collection, no filter
    async fn find_one(&self) -> Result<Option<SiteConfig>, SiteError>;
}

/// `sites` collection stored as a JSON file: either an array of documents
/// or a single document. A missing file is an empty collection.
pub struct JsonSiteRepository {
    path: PathBuf,
}

impl JsonSiteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl SiteRepository for JsonSiteRepository {
    async fn find_one(&self) -> Result<Option<SiteConfig>, SiteError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Site collection {} does not exist", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let document = match serde_json::from_str::<Value>(&content)? {
            Value::Array(documents) => documents.into_iter().next(),
            Value::Null => None,
            document => Some(document),
        };

        match document {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }
}

/// Fixed in-memory document
#[derive(Default)]
pub struct MemorySiteRepository {
    site: Option<SiteConfig>,
}

impl MemorySiteRepository {
    pub fn new(site: Option<SiteConfig>) -> Self {
        Self { site }
    }
}

#[async_trait::async_trait]
impl SiteRepository for MemorySiteRepository {
    async fn find_one(&self) -> Result<Option<SiteConfig>, SiteError> {
        Ok(self.site.clone())
    }
}
