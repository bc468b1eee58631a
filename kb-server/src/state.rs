//! Shared application state.
//!
//! Services are constructed once here and cloned into handlers through
//! axum's `State`. Nothing in the handler layer reaches for globals.

use crate::services::{AnnouncementService, ApiKeyHandle, ChatService, KnowledgeService};

use kb_config::GeminiConfig;
use kb_db::{AnnouncementRepository, KnowledgeRepository};
use kb_gemini::CompletionClient;

use std::sync::Arc;

use minijinja::Environment;
use sqlx::SqlitePool;

/// Connection settings for the completion client, kept so the key-update
/// endpoint can smoke-construct a fresh client.
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub model: String,
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl From<&GeminiConfig> for CompletionSettings {
    fn from(config: &GeminiConfig) -> Self {
        Self {
            model: config.model.clone(),
            api_base_url: config.api_base_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub knowledge: KnowledgeService,
    pub announcements: AnnouncementService,
    pub chat: ChatService,
    pub api_key: ApiKeyHandle,
    pub settings: CompletionSettings,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        completion: CompletionClient,
        api_key: ApiKeyHandle,
        gemini: &GeminiConfig,
        templates: Environment<'static>,
    ) -> Self {
        let knowledge = KnowledgeService::new(KnowledgeRepository::new(pool.clone()));
        let announcements = AnnouncementService::new(AnnouncementRepository::new(pool.clone()));
        let chat = ChatService::new(
            knowledge.clone(),
            completion,
            api_key.clone(),
            gemini.context_limit,
        );

        Self {
            pool,
            knowledge,
            announcements,
            chat,
            api_key,
            settings: CompletionSettings::from(gemini),
            templates: Arc::new(templates),
        }
    }
}
