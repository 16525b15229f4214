use std::path::PathBuf;

use async_trait::async_trait;

use crate::server::{blob::BlobStore, error::blob::BlobError};

/// Stores uploads under a local directory, served by the static asset stage.
pub struct LocalBlobStore {
    dir: PathBuf,
    url_prefix: String,
}

impl LocalBlobStore {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.into(),
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, _content_type: &str) -> Result<String, BlobError> {
        let path = self.dir.join(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        tracing::debug!(path = %path.display(), "Stored uploaded image");

        Ok(format!("{}/{}", self.url_prefix.trim_end_matches('/'), key))
    }
}
