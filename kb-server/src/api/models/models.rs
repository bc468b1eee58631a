//! API-key management handlers
//!
//! Message strings here are a compatibility contract with the admin UI -
//! do not reword them.

use crate::state::AppState;
use crate::{ApiError, ApiResult, CurrentApiKeyResponse, MessageResponse, UpdateApiKeyRequest};

use kb_gemini::{GeminiClient, key_format_is_valid};

use axum::{Json, extract::State};
use log::info;

/// GET /api/models/current-api-key
///
/// Report the key currently in use. An unset key is a success=false body
/// with HTTP 200, not an error.
pub async fn current_api_key(State(state): State<AppState>) -> Json<CurrentApiKeyResponse> {
    let api_key = state.api_key.current();

    if api_key.is_empty() {
        Json(CurrentApiKeyResponse {
            success: false,
            message: Some("No API key configured".to_string()),
            api_key: String::new(),
        })
    } else {
        Json(CurrentApiKeyResponse {
            success: true,
            message: None,
            api_key,
        })
    }
}

/// POST /api/models/update-api-key
///
/// Replace the process-wide key. The new value is committed only after the
/// format check and a smoke construction of the completion client both
/// pass, so a failed update leaves the previous key in place.
pub async fn update_api_key(
    State(state): State<AppState>,
    Json(request): Json<UpdateApiKeyRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let new_key = request.api_key.trim().to_string();

    if new_key.is_empty() {
        return Err(ApiError::config("API key cannot be empty"));
    }

    if !key_format_is_valid(&new_key) {
        return Err(ApiError::config(
            "Invalid API key format. GEMINI API keys should start with 'AIza'",
        ));
    }

    if let Err(e) = GeminiClient::new(
        state.settings.api_base_url.clone(),
        state.settings.model.clone(),
        state.settings.timeout_secs,
    ) {
        return Err(ApiError::config(format!(
            "API key validation failed: {}",
            e.message()
        )));
    }

    state.api_key.replace(new_key);
    info!("Completion API key replaced via admin endpoint");

    Ok(Json(MessageResponse {
        success: true,
        message: "API key updated successfully".to_string(),
    }))
}
