use crate::api::announcement::announcement::{get_announcement, set_announcement};
use crate::api::chat::chat::send_message;
use crate::api::knowledge::knowledge::{
    create_knowledge, delete_knowledge, get_knowledge, knowledge_stats, list_knowledge,
    update_knowledge,
};
use crate::api::models::models::{current_api_key, update_api_key};
use crate::state::AppState;
use crate::{admin, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Admin pages
        .route("/", get(admin::dashboard))
        .route("/knowledge", get(admin::knowledge_page))
        .route("/testing", get(admin::testing_page))
        .route("/models", get(admin::models_page))
        .route("/announcement", get(admin::announcement_page))
        .route("/api-docs", get(admin::api_docs_page))
        .route("/settings", get(admin::settings_page))
        // API-key management
        .route("/api/models/current-api-key", get(current_api_key))
        .route("/api/models/update-api-key", post(update_api_key))
        // Chat API
        .route("/api/chat", post(send_message))
        // Knowledge API
        .route("/api/knowledge", get(list_knowledge).post(create_knowledge))
        .route("/api/knowledge/stats", get(knowledge_stats))
        .route(
            "/api/knowledge/{id}",
            get(get_knowledge)
                .put(update_knowledge)
                .delete(delete_knowledge),
        )
        // Announcement API
        .route(
            "/api/announcement",
            get(get_announcement).post(set_announcement),
        )
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins, matching the embeddable widget contract)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
