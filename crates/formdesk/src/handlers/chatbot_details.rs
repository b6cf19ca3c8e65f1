//! Chatbot contact detail handlers.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use formdesk_core::forms::{Entity, ListResponse, MessageResponse, Submission};

use super::forms;
use crate::{handlers::ApiError, state::AppState};

const ENTITY: Entity = Entity::ChatbotDetail;

/// Save chatbot contact details (POST /api/chatbot-details).
pub async fn create_chatbot_detail(
    State(state): State<AppState>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let submission = forms::json_submission(ENTITY, payload)?;
    forms::validate(ENTITY, &submission, false)?;

    forms::save(&state, ENTITY, submission).await
}

/// List all chatbot contact details (GET /api/chatbot-details).
pub async fn list_chatbot_details(
    State(state): State<AppState>,
) -> Result<Json<ListResponse>, ApiError> {
    forms::list(&state, ENTITY).await
}
