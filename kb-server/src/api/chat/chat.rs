//! Chat REST API handler

use crate::state::AppState;
use crate::{ApiResult, ChatRequest, ChatResponse};

use axum::{Json, extract::State};

/// POST /api/chat
///
/// Answer one user message with retrieval context from the knowledge corpus
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let answer = state.chat.answer(&request.message).await?;

    Ok(Json(ChatResponse {
        success: true,
        response: answer,
    }))
}
