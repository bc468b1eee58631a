//! Announcement REST API handlers

use crate::state::AppState;
use crate::{AnnouncementResponse, ApiResult, MessageResponse, SetAnnouncementRequest};

use axum::{Json, extract::State};

/// GET /api/announcement
///
/// Current announcement, or null when none has been published
pub async fn get_announcement(
    State(state): State<AppState>,
) -> ApiResult<Json<AnnouncementResponse>> {
    let announcement = state.announcements.current().await?;

    Ok(Json(AnnouncementResponse {
        success: true,
        announcement: announcement.map(Into::into),
    }))
}

/// POST /api/announcement
///
/// Replace the announcement wholesale
pub async fn set_announcement(
    State(state): State<AppState>,
    Json(request): Json<SetAnnouncementRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .announcements
        .set(request.title, request.message)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Announcement updated successfully".to_string(),
    }))
}
