//! Announcement repository - a single row, replaced wholesale on set.

use crate::{DbError, Result as DbErrorResult};

use kb_core::Announcement;

use chrono::DateTime;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct AnnouncementRepository {
    pool: SqlitePool,
}

impl AnnouncementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The current announcement, or None when nothing has been published.
    pub async fn current(&self) -> DbErrorResult<Option<Announcement>> {
        let row = sqlx::query(
            r#"
                SELECT title, message, updated_at
                FROM kb_announcements
                WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let updated_at: i64 = row.try_get("updated_at")?;

        Ok(Some(Announcement {
            title: row.try_get("title")?,
            message: row.try_get("message")?,
            updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
                DbError::decode("invalid timestamp in kb_announcements.updated_at")
            })?,
        }))
    }

    /// Upsert the singleton row. Last write wins.
    pub async fn set(&self, announcement: &Announcement) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO kb_announcements (id, title, message, updated_at)
                VALUES (1, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    message = excluded.message,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(&announcement.title)
        .bind(&announcement.message)
        .bind(announcement.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
