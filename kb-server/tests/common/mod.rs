#![allow(dead_code)]

//! Test infrastructure for kb-server API tests

use kb_config::GeminiConfig;
use kb_gemini::{CompletionClient, MockCompletion};
use kb_server::AppState;
use kb_server::services::ApiKeyHandle;

use sqlx::SqlitePool;
use uuid::Uuid;

/// A key that passes the format check (AIza prefix, long enough)
pub const TEST_API_KEY: &str = "AIzaSyTest0123456789abcdefghijklmnop";

/// In-memory SQLite pool with the schema migrated
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:").await.expect("in-memory pool");

    sqlx::migrate!("../crates/kb-db/migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

/// Create AppState for testing: canned mock backend, no API key configured
pub async fn create_test_app_state() -> AppState {
    let mock = MockCompletion::replying("This is a canned reply.");
    create_test_app_state_with(CompletionClient::Mock(mock), None).await
}

/// Create AppState with a chosen completion backend and initial key
pub async fn create_test_app_state_with(
    completion: CompletionClient,
    api_key: Option<String>,
) -> AppState {
    let pool = create_test_pool().await;
    let templates = kb_server::templates::environment().expect("Failed to load templates");

    AppState::new(
        pool,
        completion,
        ApiKeyHandle::new(api_key),
        &GeminiConfig::default(),
        templates,
    )
}

/// Insert a knowledge entry directly
pub async fn seed_knowledge(pool: &SqlitePool, category: &str, title: &str, content: &str) -> Uuid {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
        INSERT INTO kb_knowledge_entries (id, category, title, content, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)"#,
    )
    .bind(id.to_string())
    .bind(category)
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to seed knowledge entry");

    id
}
