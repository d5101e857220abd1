//! Storage abstraction trait.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Unexpected storage response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Handle returned by the storage collaborator for an accepted upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredFile {
    /// Stable external identifier assigned by the collaborator.
    pub id: String,
    /// Publicly shareable view link.
    pub view_url: String,
}

/// Storage abstraction trait.
///
/// The submission pipeline only ever uploads; it never reads back, lists, or
/// deletes. Failed requests may leave orphaned files behind - cleanup is
/// external.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Upload a file under the given name and return its external handle.
    ///
    /// `folder_id` targets a collaborator-side folder when configured.
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
        folder_id: Option<&str>,
    ) -> StorageResult<StoredFile>;
}
