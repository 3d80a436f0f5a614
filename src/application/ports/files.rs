// src/application/ports/files.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Storage for uploaded image files under a publicly served root.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist bytes under the given filename and return the public URL the
    /// file is reachable at.
    async fn save(&self, file_name: &str, bytes: &[u8]) -> ApplicationResult<String>;

    /// Bytes behind an image reference, or None when the reference does not
    /// resolve to a readable local file (remote URLs included).
    async fn read(&self, reference: &str) -> Option<Vec<u8>>;
}
