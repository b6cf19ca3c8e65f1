use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use formdesk_core::forms::{
    Entity, MessageResponse, ValidationError, MISSING_FIELDS_MESSAGE, UPLOAD_TOO_LARGE_MESSAGE,
};
use formdesk_core::storage::RepositoryError;

use crate::uploads::UploadError;

/// Why a submission could not be saved.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Handler error for the form endpoints.
///
/// The response carries only the entity's generic message; the cause is
/// logged and never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Rejected {entity} submission: {source}")]
    Invalid {
        entity: Entity,
        #[source]
        source: ValidationError,
    },
    #[error("Rejected {entity} upload over the body limit: {detail}")]
    TooLarge { entity: Entity, detail: String },
    #[error("Failed to save {entity}: {source}")]
    Save {
        entity: Entity,
        #[source]
        source: SaveError,
    },
    #[error("Failed to fetch {entity}: {source}")]
    Fetch {
        entity: Entity,
        #[source]
        source: RepositoryError,
    },
}

impl ApiError {
    pub fn invalid(entity: Entity, source: ValidationError) -> Self {
        Self::Invalid { entity, source }
    }

    pub fn too_large(entity: Entity, detail: impl Into<String>) -> Self {
        Self::TooLarge {
            entity,
            detail: detail.into(),
        }
    }

    pub fn save(entity: Entity, source: impl Into<SaveError>) -> Self {
        Self::Save {
            entity,
            source: source.into(),
        }
    }

    pub fn fetch(entity: Entity, source: RepositoryError) -> Self {
        Self::Fetch { entity, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Invalid { .. } => StatusCode::BAD_REQUEST,
            ApiError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Save { .. } | ApiError::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Invalid { .. } => MISSING_FIELDS_MESSAGE,
            ApiError::TooLarge { .. } => UPLOAD_TOO_LARGE_MESSAGE,
            ApiError::Save { entity, .. } => entity.save_failed_message(),
            ApiError::Fetch { entity, .. } => entity.fetch_failed_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "API error");
        } else {
            tracing::warn!(status = %status, error = %self, "API error");
        }

        (status, Json(MessageResponse::failure(self.public_message()))).into_response()
    }
}
