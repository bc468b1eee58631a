pub mod admin;
pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod services;
pub mod state;
pub mod templates;

#[cfg(test)]
mod tests;

pub use api::{
    announcement::{
        announcement::{get_announcement, set_announcement},
        announcement_dto::AnnouncementDto,
        announcement_response::AnnouncementResponse,
        set_announcement_request::SetAnnouncementRequest,
    },
    chat::{chat::send_message, chat_request::ChatRequest, chat_response::ChatResponse},
    error::ApiError,
    error::Result as ApiResult,
    knowledge::{
        create_knowledge_request::CreateKnowledgeRequest,
        create_knowledge_response::CreateKnowledgeResponse,
        knowledge::{
            create_knowledge, delete_knowledge, get_knowledge, knowledge_stats, list_knowledge,
            update_knowledge,
        },
        knowledge_dto::KnowledgeDto,
        knowledge_list_response::KnowledgeListResponse,
        knowledge_response::KnowledgeResponse,
        stats_response::StatsResponse,
        update_knowledge_request::UpdateKnowledgeRequest,
    },
    message_response::MessageResponse,
    models::{
        current_api_key_response::CurrentApiKeyResponse,
        models::{current_api_key, update_api_key},
        update_api_key_request::UpdateApiKeyRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::state::{AppState, CompletionSettings};
