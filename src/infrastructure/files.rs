// src/infrastructure/files.rs
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::files::FileStore,
};

const PUBLIC_PREFIX: &str = "/static/";
const UPLOAD_DIR: &str = "uploads";

/// File storage rooted at the publicly served static directory. Uploads land
/// under `<root>/uploads/` and are addressed as `/static/uploads/<name>`.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a reference onto the local filesystem. Remote URLs and references
    /// that climb out of their directory do not resolve.
    fn resolve(&self, reference: &str) -> Option<PathBuf> {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return None;
        }
        if reference.split(['/', '\\']).any(|segment| segment == "..") {
            return None;
        }
        if let Some(rest) = reference.strip_prefix(PUBLIC_PREFIX) {
            return Some(self.root.join(rest));
        }
        let path = Path::new(reference);
        path.is_relative().then(|| path.to_path_buf())
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> ApplicationResult<String> {
        let dir = self.root.join(UPLOAD_DIR);
        fs::create_dir_all(&dir)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        fs::write(dir.join(file_name), bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(format!("{PUBLIC_PREFIX}{UPLOAD_DIR}/{file_name}"))
    }

    async fn read(&self, reference: &str) -> Option<Vec<u8>> {
        let path = self.resolve(reference)?;
        fs::read(path).await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_read_via_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());

        let url = store.save("cover.jpg", b"jpeg bytes").await.unwrap();
        assert_eq!(url, "/static/uploads/cover.jpg");

        let bytes = store.read(&url).await.unwrap();
        assert_eq!(bytes, b"jpeg bytes");
    }

    #[tokio::test]
    async fn remote_urls_do_not_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());
        assert!(store.read("https://example.com/a.png").await.is_none());
        assert!(store.read("http://example.com/a.png").await.is_none());
    }

    #[tokio::test]
    async fn traversal_references_do_not_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());
        assert!(store.read("/static/../secret.txt").await.is_none());
        assert!(store.read("../secret.txt").await.is_none());
    }

    #[tokio::test]
    async fn missing_files_read_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());
        assert!(store.read("/static/uploads/absent.png").await.is_none());
    }
}
