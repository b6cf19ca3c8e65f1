use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use super::{PendingUpload, StoredUpload, UploadError, UploadStore};

/// Writes uploads to a directory on the local filesystem.
///
/// Files get a random name without extension; the client's file name is
/// only logged.
#[derive(Debug, Clone)]
pub struct LocalUploadStore {
    root: PathBuf,
}

impl LocalUploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn store(&self, upload: PendingUpload) -> Result<StoredUpload, UploadError> {
        let path = self.root.join(Uuid::new_v4().simple().to_string());
        let stored_path = path.display().to_string();

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| UploadError::Write {
                path: self.root.display().to_string(),
                source,
            })?;

        tokio::fs::write(&path, &upload.data)
            .await
            .map_err(|source| UploadError::Write {
                path: stored_path.clone(),
                source,
            })?;

        tracing::debug!(
            field = %upload.field,
            file_name = %upload.file_name,
            content_type = ?upload.content_type,
            size = upload.data.len(),
            path = %stored_path,
            "Stored upload"
        );

        Ok(StoredUpload {
            path: stored_path,
            size: upload.data.len(),
        })
    }

    async fn discard(&self, stored: &StoredUpload) -> Result<(), UploadError> {
        tokio::fs::remove_file(&stored.path)
            .await
            .map_err(|source| UploadError::Remove {
                path: stored.path.clone(),
                source,
            })?;

        tracing::debug!(path = %stored.path, "Discarded upload");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Bytes;

    use super::*;

    fn resume(data: &'static [u8]) -> PendingUpload {
        PendingUpload {
            field: "resume".to_string(),
            file_name: "cv.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
            data: Bytes::from_static(data),
        }
    }

    #[tokio::test]
    async fn test_store_writes_file_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(dir.path().join("uploads"));

        let stored = store.store(resume(b"%PDF-1.4")).await.unwrap();

        assert!(stored.path.starts_with(&dir.path().join("uploads").display().to_string()));
        assert_eq!(stored.size, 8);
        assert_eq!(std::fs::read(&stored.path).unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_each_upload_gets_a_distinct_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(dir.path());

        let first = store.store(resume(b"a")).await.unwrap();
        let second = store.store(resume(b"a")).await.unwrap();

        assert_ne!(first.path, second.path);
    }

    #[tokio::test]
    async fn test_discard_removes_the_stored_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(dir.path());
        let stored = store.store(resume(b"a")).await.unwrap();

        store.discard(&stored).await.unwrap();

        assert!(!std::path::Path::new(&stored.path).exists());
    }

    #[tokio::test]
    async fn test_discard_of_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(dir.path());
        let stored = StoredUpload {
            path: dir.path().join("gone").display().to_string(),
            size: 0,
        };

        let result = store.discard(&stored).await;

        assert!(matches!(result, Err(UploadError::Remove { .. })));
    }

    #[tokio::test]
    async fn test_unwritable_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();
        let store = LocalUploadStore::new(&blocker);

        let result = store.store(resume(b"a")).await;

        assert!(matches!(result, Err(UploadError::Write { .. })));
    }
}
