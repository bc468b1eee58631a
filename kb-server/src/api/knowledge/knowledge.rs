//! Knowledge REST API handlers
//!
//! CRUD plus aggregate stats over the admin-curated corpus.

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreateKnowledgeRequest, CreateKnowledgeResponse, KnowledgeDto,
    KnowledgeListResponse, KnowledgeResponse, MessageResponse, StatsResponse,
    UpdateKnowledgeRequest,
};

use kb_core::{KnowledgeUpdate, NewKnowledgeEntry};

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/knowledge
///
/// List every entry, newest first
pub async fn list_knowledge(
    State(state): State<AppState>,
) -> ApiResult<Json<KnowledgeListResponse>> {
    let entries = state.knowledge.list_all().await?;
    let knowledge: Vec<KnowledgeDto> = entries.into_iter().map(KnowledgeDto::from).collect();

    Ok(Json(KnowledgeListResponse {
        success: true,
        count: knowledge.len(),
        knowledge,
    }))
}

/// POST /api/knowledge
///
/// Create an entry; id and timestamps are server-assigned
pub async fn create_knowledge(
    State(state): State<AppState>,
    Json(request): Json<CreateKnowledgeRequest>,
) -> ApiResult<Json<CreateKnowledgeResponse>> {
    let entry = state
        .knowledge
        .create(NewKnowledgeEntry {
            category: request.category,
            title: request.title,
            content: request.content,
        })
        .await?;

    Ok(Json(CreateKnowledgeResponse {
        success: true,
        id: entry.id.to_string(),
    }))
}

/// GET /api/knowledge/stats
///
/// Aggregate counts grouped by category
pub async fn knowledge_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let stats = state.knowledge.stats().await?;

    Ok(Json(StatsResponse {
        success: true,
        total_knowledge: stats.total_knowledge,
        categories: stats.categories,
    }))
}

/// GET /api/knowledge/{id}
///
/// Get a single entry by id
pub async fn get_knowledge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<KnowledgeResponse>> {
    let entry_id = Uuid::parse_str(&id)?;

    let entry = state
        .knowledge
        .get(entry_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Knowledge entry {} not found", id)))?;

    Ok(Json(KnowledgeResponse {
        success: true,
        knowledge: entry.into(),
    }))
}

/// PUT /api/knowledge/{id}
///
/// Partial update; submitted fields must pass the creation invariants
pub async fn update_knowledge(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateKnowledgeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let entry_id = Uuid::parse_str(&id)?;

    state
        .knowledge
        .update(
            entry_id,
            KnowledgeUpdate {
                category: request.category,
                title: request.title,
                content: request.content,
            },
        )
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Knowledge updated successfully".to_string(),
    }))
}

/// DELETE /api/knowledge/{id}
///
/// Hard delete
pub async fn delete_knowledge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let entry_id = Uuid::parse_str(&id)?;

    state.knowledge.delete(entry_id).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Knowledge deleted successfully".to_string(),
    }))
}
