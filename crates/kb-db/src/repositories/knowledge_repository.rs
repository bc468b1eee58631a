//! Knowledge repository for CRUD and stats over the knowledge corpus.
//!
//! UUIDs are stored as TEXT, timestamps as unix seconds. A malformed
//! stored value surfaces as `DbError::Decode`, never a panic.

use crate::{DbError, Result as DbErrorResult};

use kb_core::{KnowledgeEntry, KnowledgeStats};

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct KnowledgeRepository {
    pool: SqlitePool,
}

impl KnowledgeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, entry: &KnowledgeEntry) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO kb_knowledge_entries (
                    id, category, title, content, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entry.id.to_string())
        .bind(&entry.category)
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(entry.created_at.timestamp())
        .bind(entry.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<KnowledgeEntry>> {
        let row = sqlx::query(
            r#"
                SELECT id, category, title, content, created_at, updated_at
                FROM kb_knowledge_entries
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_entry).transpose()
    }

    /// Every entry, newest first. No pagination - the corpus is
    /// admin-curated and small.
    pub async fn list_all(&self) -> DbErrorResult<Vec<KnowledgeEntry>> {
        let rows = sqlx::query(
            r#"
                SELECT id, category, title, content, created_at, updated_at
                FROM kb_knowledge_entries
                ORDER BY created_at DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_entry).collect()
    }

    /// Write the full row back. Returns false when the id no longer exists.
    pub async fn update(&self, entry: &KnowledgeEntry) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE kb_knowledge_entries
                SET category = ?, title = ?, content = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&entry.category)
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(entry.updated_at.timestamp())
        .bind(entry.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when the id does not exist.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM kb_knowledge_entries WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Aggregate counts grouped by category, computed in the store.
    pub async fn stats(&self) -> DbErrorResult<KnowledgeStats> {
        let rows = sqlx::query(
            r#"
                SELECT category, COUNT(*) AS entry_count
                FROM kb_knowledge_entries
                GROUP BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut stats = KnowledgeStats::default();
        for row in &rows {
            let category: String = row.try_get("category")?;
            let count: i64 = row.try_get("entry_count")?;
            stats.total_knowledge += count as u64;
            stats.categories.insert(category, count as u64);
        }

        Ok(stats)
    }
}

fn map_entry(row: &SqliteRow) -> DbErrorResult<KnowledgeEntry> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(KnowledgeEntry {
        id: Uuid::parse_str(&id).map_err(|e| {
            DbError::decode(format!("invalid UUID in kb_knowledge_entries.id: {e}"))
        })?,
        category: row.try_get("category")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::decode("invalid timestamp in kb_knowledge_entries.created_at")
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::decode("invalid timestamp in kb_knowledge_entries.updated_at")
        })?,
    })
}
