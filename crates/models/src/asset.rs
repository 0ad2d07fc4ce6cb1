use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Top-level folder an uploaded file is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Articles,
    Images,
    Videos,
}

impl AssetCategory {
    /// Classifies a declared MIME type. Anything that is neither an image
    /// nor a video is treated as an article.
    pub fn from_mime(content_type: &str) -> Self {
        if content_type.starts_with("image/") {
            AssetCategory::Images
        } else if content_type.starts_with("video/") {
            AssetCategory::Videos
        } else {
            AssetCategory::Articles
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Articles => "articles",
            AssetCategory::Images => "images",
            AssetCategory::Videos => "videos",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage location of one upload, independent of the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetKey {
    pub category: AssetCategory,
    pub directory: String,
    pub id: Uuid,
    pub extension: String,
}

impl AssetKey {
    /// Creates a key with a freshly generated id
    pub fn generate(category: AssetCategory, directory: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            category,
            directory: directory.into(),
            id: Uuid::new_v4(),
            extension: extension.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.id, self.extension)
    }

    /// `{category}/{directory}/{id}.{extension}`
    pub fn relative_path(&self) -> String {
        format!("{}/{}/{}", self.category, self.directory, self.file_name())
    }

    /// Object key with an optional storage prefix; an empty prefix is omitted entirely
    pub fn object_key(&self, base_path: &str) -> String {
        let base_path = base_path.trim_matches('/');
        if base_path.is_empty() {
            self.relative_path()
        } else {
            format!("{}/{}", base_path, self.relative_path())
        }
    }
}

/// A file persisted by a storage backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAsset {
    pub category: AssetCategory,
    pub directory: String,
    pub id: Uuid,
    pub extension: String,
    pub url: String,
}

impl StoredAsset {
    pub fn new(key: AssetKey, url: String) -> Self {
        Self {
            category: key.category,
            directory: key.directory,
            id: key.id,
            extension: key.extension,
            url,
        }
    }
}
