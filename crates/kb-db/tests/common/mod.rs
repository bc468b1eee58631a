#![allow(dead_code)]

//! Shared test infrastructure for kb-db repository tests

use kb_core::KnowledgeEntry;

use chrono::Duration;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Fresh in-memory SQLite pool with the schema migrated.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        // An in-memory database exists per connection; keep exactly one
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

/// Build an entry whose created_at lies `age_secs` in the past, so list
/// ordering is deterministic.
pub fn entry_aged(category: &str, title: &str, content: &str, age_secs: i64) -> KnowledgeEntry {
    let mut entry = KnowledgeEntry::new(category.into(), title.into(), content.into());
    entry.created_at -= Duration::seconds(age_secs);
    entry.updated_at = entry.created_at;
    entry
}
