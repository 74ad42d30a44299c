//! Object storage for passport photos.
//!
//! [`PhotoStore`] is the seam between the API and wherever photo bytes
//! live. [`LocalPhotoStore`] keeps them on the local filesystem and relies
//! on the API to serve that directory statically.

use async_trait::async_trait;

pub mod local;

pub use local::LocalPhotoStore;

/// Errors from a photo store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Uploads never overwrite an existing object.
    #[error("Object '{0}' already exists")]
    AlreadyExists(String),

    #[error("Invalid object name '{0}'")]
    InvalidName(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A bucket of publicly readable photo objects.
#[async_trait]
pub trait PhotoStore: Send + Sync + 'static {
    /// Store `bytes` under `name`. Returns `Err(AlreadyExists)` if the
    /// name is taken.
    async fn upload(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// The public URL an uploaded object is served from.
    fn public_url(&self, name: &str) -> String;

    /// Verify the store can currently accept uploads.
    async fn health_check(&self) -> Result<(), StorageError>;
}
