//! Job application handlers.
//!
//! Applications arrive as `multipart/form-data`: text fields plus the resume
//! file. The file is handed to the upload store only after the submission
//! passed validation, and the returned path is what gets stored. A file whose
//! row could not be inserted is discarded again.

use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        State,
    },
    http::StatusCode,
    Json,
};

use formdesk_core::forms::{Entity, ListResponse, MessageResponse, Submission, ValidationError};

use super::forms;
use crate::{handlers::ApiError, state::AppState, uploads::PendingUpload};

const ENTITY: Entity = Entity::JobApplication;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

/// Submit a job application (POST /api/job-applications).
pub async fn create_job_application(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let multipart = multipart.map_err(|rejection| {
        ApiError::invalid(ENTITY, ValidationError::Malformed(rejection.body_text()))
    })?;

    let (mut submission, resume) = read_form(multipart).await.map_err(multipart_error)?;

    forms::validate(ENTITY, &submission, resume.is_some())?;

    let stored = match resume {
        Some(upload) => {
            let stored = state
                .uploads
                .store(upload)
                .await
                .map_err(|source| ApiError::save(ENTITY, source))?;
            tracing::debug!(path = %stored.path, size = stored.size, "Stored resume");
            submission.insert(RESUME_FIELD, stored.path.clone());
            Some(stored)
        }
        None => None,
    };

    let result = forms::save(&state, ENTITY, submission).await;

    // No row references the file once the insert failed
    if let (Err(_), Some(stored)) = (&result, &stored) {
        if let Err(err) = state.uploads.discard(stored).await {
            tracing::warn!(error = %err, "Failed to discard orphaned resume");
        }
    }

    result
}

/// List all job applications (GET /api/job-applications).
pub async fn list_job_applications(
    State(state): State<AppState>,
) -> Result<Json<ListResponse>, ApiError> {
    forms::list(&state, ENTITY).await
}

/// Body-limit overruns keep their 413; anything else is a malformed form.
fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::too_large(ENTITY, err.body_text())
    } else {
        ApiError::invalid(ENTITY, ValidationError::Malformed(err.body_text()))
    }
}

/// Collects text fields into a submission and buffers the resume file.
///
/// A `resume` part without a file name does not count as an attachment and
/// never reaches the submission as text.
async fn read_form(
    mut multipart: Multipart,
) -> Result<(Submission, Option<PendingUpload>), MultipartError> {
    let mut submission = Submission::new();
    let mut resume = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == RESUME_FIELD {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await?;

            if let Some(file_name) = file_name.filter(|n| !n.is_empty()) {
                resume = Some(PendingUpload {
                    field: name,
                    file_name,
                    content_type,
                    data,
                });
            }
        } else {
            let text = field.text().await?;
            submission.insert(name, text);
        }
    }

    Ok((submission, resume))
}
