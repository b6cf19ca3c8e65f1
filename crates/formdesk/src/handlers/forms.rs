//! Steps shared by every form endpoint: body parsing, validation, the single
//! insert and the full-table listing.

use axum::{extract::rejection::JsonRejection, Json};

use formdesk_core::forms::{
    validate_submission, Entity, ListResponse, MessageResponse, Submission, ValidationError,
};

use crate::{handlers::ApiError, state::AppState};

/// Unwraps a JSON body, treating any rejection as an invalid submission.
pub fn json_submission(
    entity: Entity,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<Submission, ApiError> {
    payload
        .map(|Json(submission)| submission)
        .map_err(|rejection| {
            ApiError::invalid(entity, ValidationError::Malformed(rejection.body_text()))
        })
}

/// Runs the entity's required-field check.
pub fn validate(
    entity: Entity,
    submission: &Submission,
    has_attachment: bool,
) -> Result<(), ApiError> {
    validate_submission(entity, submission, has_attachment)
        .map_err(|source| ApiError::invalid(entity, source))
}

/// Inserts a validated submission and builds the success response.
pub async fn save(
    state: &AppState,
    entity: Entity,
    submission: Submission,
) -> Result<Json<MessageResponse>, ApiError> {
    let record = submission.into_record(entity);

    let id = state
        .repo
        .insert(&record)
        .await
        .map_err(|source| ApiError::save(entity, source))?;

    tracing::info!(%entity, id, "Saved submission");

    Ok(Json(MessageResponse::ok(entity.created_message())))
}

/// Returns every stored row of the entity.
pub async fn list(state: &AppState, entity: Entity) -> Result<Json<ListResponse>, ApiError> {
    let rows = state
        .repo
        .select_all(entity)
        .await
        .map_err(|source| ApiError::fetch(entity, source))?;

    tracing::debug!(%entity, count = rows.len(), "Listed submissions");

    Ok(Json(ListResponse::new(rows)))
}
