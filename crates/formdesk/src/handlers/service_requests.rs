//! Service request handlers.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use formdesk_core::forms::{Entity, ListResponse, MessageResponse, Submission};

use super::forms;
use crate::{handlers::ApiError, state::AppState};

const ENTITY: Entity = Entity::ServiceRequest;

/// Submit a service request (POST /api/service-request).
pub async fn create_service_request(
    State(state): State<AppState>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let submission = forms::json_submission(ENTITY, payload)?;
    forms::validate(ENTITY, &submission, false)?;

    let response = forms::save(&state, ENTITY, submission).await?;

    log_current_rows(&state);

    Ok(response)
}

/// List all service requests (GET /api/service-requests).
pub async fn list_service_requests(
    State(state): State<AppState>,
) -> Result<Json<ListResponse>, ApiError> {
    forms::list(&state, ENTITY).await
}

/// Best-effort diagnostic read-back after an insert.
///
/// Runs detached from the request; its outcome is only logged.
fn log_current_rows(state: &AppState) {
    let repo = state.repo.clone();
    tokio::spawn(async move {
        match repo.select_all(ENTITY).await {
            Ok(rows) => {
                tracing::debug!(count = rows.len(), "Current service request records");
                tracing::trace!(?rows, "Service request records");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read back service requests");
            }
        }
    });
}
