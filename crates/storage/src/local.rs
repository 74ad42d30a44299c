//! Filesystem-backed [`PhotoStore`].

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use passport_core::photo::is_valid_object_name;
use tokio::io::AsyncWriteExt;

use crate::{PhotoStore, StorageError};

/// Stores photos as files in `root`, served under `public_base_url`.
#[derive(Debug, Clone)]
pub struct LocalPhotoStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalPhotoStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        let public_base_url: String = public_base_url.into();
        Self {
            root: root.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Scratch file written and removed by the health check. Not a valid
/// object name, so it can never collide with an upload.
const WRITE_CHECK_FILE: &str = ".write-check";

#[async_trait]
impl PhotoStore for LocalPhotoStore {
    async fn upload(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if !is_valid_object_name(name) {
            return Err(StorageError::InvalidName(name.to_string()));
        }

        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.root.join(name);

        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        file.write_all(bytes).await?;
        file.flush().await?;

        tracing::debug!(name, size = bytes.len(), path = %path.display(), "Photo stored");
        Ok(())
    }

    fn public_url(&self, name: &str) -> String {
        format!("{}/{name}", self.public_base_url)
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        let scratch = self.root.join(WRITE_CHECK_FILE);
        tokio::fs::write(&scratch, b"ok").await?;
        tokio::fs::remove_file(&scratch).await?;
        Ok(())
    }
}
