use super::models::FileSystem;
use anyhow::Result;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Folders created under `{public_dir}/uploads` at startup
const UPLOAD_CATEGORIES: [&str; 3] = ["articles", "images", "videos"];

impl FileSystem {
    pub async fn ensure_public_structure(public_dir: &str) -> Result<PathBuf> {
        let abs_path = Self::get_absolute_path(Path::new(public_dir))?;
        let uploads_path = abs_path.join("uploads");

        Self::create_directory(&abs_path, "Public directory").await?;
        Self::create_directory(&uploads_path, "Uploads directory").await?;
        for category in UPLOAD_CATEGORIES {
            Self::create_directory(&uploads_path.join(category), category).await?;
        }

        Ok(uploads_path)
    }

    /// Recursively creates `path`; succeeds if it already exists
    pub async fn ensure_directory(path: &Path) -> std::io::Result<()> {
        fs::create_dir_all(path).await?;
        tracing::debug!("    Ensured: {}", path.display());
        Ok(())
    }

    pub async fn write_file(path: &Path, data: &Bytes) -> std::io::Result<()> {
        fs::write(path, data).await?;
        tracing::debug!("    Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    async fn create_directory(path: &Path, description: &str) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
            tracing::debug!("    Created: {} ({})", path.display(), description);
        } else {
            tracing::debug!("    Exists:  {} ({})", path.display(), description);
        }
        Ok(())
    }

    fn get_absolute_path(path: &Path) -> Result<PathBuf> {
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        Ok(abs_path)
    }

    pub fn get_absolute_path_string(path: &str) -> Result<String> {
        let path_buf = PathBuf::from(path);
        let abs = Self::get_absolute_path(&path_buf)?;
        Ok(abs.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_public_structure() {
        let dir = tempfile::tempdir().unwrap();
        let public_dir = dir.path().join("public");

        let uploads = FileSystem::ensure_public_structure(public_dir.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(uploads, public_dir.join("uploads"));
        for category in UPLOAD_CATEGORIES {
            assert!(uploads.join(category).is_dir());
        }

        // Second run is a no-op
        FileSystem::ensure_public_structure(public_dir.to_str().unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_ensure_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");

        FileSystem::ensure_directory(&nested).await.unwrap();
        FileSystem::ensure_directory(&nested).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");

        FileSystem::write_file(&path, &Bytes::from_static(b"# hello")).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"# hello");
    }
}
