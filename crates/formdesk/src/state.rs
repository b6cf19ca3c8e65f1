//! Shared application state.
//!
//! The storage gateway and upload store are constructed once at startup and
//! injected here; every handler reaches them through `State<AppState>`.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use formdesk_core::storage::FormRepository;

use crate::uploads::UploadStore;

#[derive(Clone)]
pub struct AppState {
    /// Storage gateway shared by all handlers.
    pub repo: Arc<dyn FormRepository>,
    /// Upload collaborator for file attachments.
    pub uploads: Arc<dyn UploadStore>,
    /// Set once the schema has been confirmed.
    schema_ready: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(repo: Arc<dyn FormRepository>, uploads: Arc<dyn UploadStore>) -> Self {
        Self {
            repo,
            uploads,
            schema_ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Ensures the schema exists and records the outcome.
    ///
    /// Failure is logged, not returned: the process keeps serving and
    /// `/readyz` reports not ready until a later attempt succeeds.
    pub async fn prepare_schema(&self) -> bool {
        match self.repo.ensure_schema().await {
            Ok(()) => {
                if !self.schema_ready.swap(true, Ordering::SeqCst) {
                    tracing::info!("Form tables ready");
                }
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create form tables");
                false
            }
        }
    }

    pub fn schema_ready(&self) -> bool {
        self.schema_ready.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use crate::{storage::SqliteRepository, uploads::LocalUploadStore};

    use super::*;

    #[tokio::test]
    async fn test_schema_not_ready_until_prepared() {
        let repo = SqliteRepository::open_in_memory().await.unwrap();
        let state = AppState::new(Arc::new(repo), Arc::new(LocalUploadStore::new("uploads")));

        assert!(!state.schema_ready());
        assert!(state.prepare_schema().await);
        assert!(state.schema_ready());
    }
}
