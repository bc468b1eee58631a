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

use crate::services::ApiKeyHandle;

use kb_gemini::{CompletionClient, GeminiClient};

use std::error::Error;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is a development convenience; absent in production
    let _ = dotenvy::dotenv();

    // Config before anything else; a bad deployment stops here
    let config = kb_config::Config::load()?;
    config.validate()?;

    // Resolve the log file under the config dir when file logging is on
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = kb_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting kb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening database at {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    sqlx::migrate!("../crates/kb-db/migrations")
        .run(&pool)
        .await?;
    info!("Database ready");

    // Completion client and the shared key handle
    let api_key = ApiKeyHandle::new(config.gemini.api_key.clone());
    let completion = CompletionClient::Gemini(GeminiClient::new(
        config.gemini.api_base_url.clone(),
        config.gemini.model.clone(),
        config.gemini.timeout_secs,
    )?);

    // Admin page templates
    let template_env = templates::environment()?;

    let app_state = AppState::new(pool, completion, api_key, &config.gemini, template_env);
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    let actual_addr = listener.local_addr()?;
    info!("Listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received, draining in-flight requests"),
        Err(e) => error!("Ctrl+C handler failed: {}", e),
    }
}
