//! Upload collaborator for file attachments.
//!
//! Handlers hand over the received bytes and get back the path to record;
//! where and how the file is kept is up to the [`UploadStore`] implementation.

mod local;

use async_trait::async_trait;
use axum::body::Bytes;
use thiserror::Error;

pub use local::LocalUploadStore;

/// A file received in a multipart request, not yet stored.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    /// Name of the multipart field the file arrived in.
    pub field: String,
    /// File name supplied by the client.
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Result of a successful store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Location of the stored file, recorded verbatim in the database.
    pub path: String,
    pub size: usize,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to write upload to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to remove upload {path}: {source}")]
    Remove {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Stores uploaded files and reports where they ended up.
#[async_trait]
pub trait UploadStore: Send + Sync {
    async fn store(&self, upload: PendingUpload) -> Result<StoredUpload, UploadError>;

    /// Removes a stored file whose submission was never saved.
    async fn discard(&self, stored: &StoredUpload) -> Result<(), UploadError>;
}
