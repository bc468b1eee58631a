//! Knowledge entry - one admin-curated record of the retrieval corpus.

use crate::{CoreError, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored (category, title, content) record. Entries are grouped by
/// `category` for dashboard stats and concatenated into chat prompts as
/// retrieval context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: Uuid,

    pub category: String,
    pub title: String,
    pub content: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl KnowledgeEntry {
    /// Create a new entry with a fresh id and matching timestamps.
    pub fn new(category: String, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            category,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place and bump `updated_at`.
    /// Absent fields keep their current values.
    pub fn apply(&mut self, update: KnowledgeUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}

/// Input for creating an entry; id and timestamps are server-assigned.
#[derive(Debug, Clone)]
pub struct NewKnowledgeEntry {
    pub category: String,
    pub title: String,
    pub content: String,
}

impl NewKnowledgeEntry {
    /// Category and content are required; title may be blank.
    pub fn validate(&self) -> Result<()> {
        if self.category.trim().is_empty() {
            return Err(CoreError::validation("Category cannot be empty"));
        }
        if self.content.trim().is_empty() {
            return Err(CoreError::validation("Content cannot be empty"));
        }
        Ok(())
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeUpdate {
    pub category: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl KnowledgeUpdate {
    /// A submitted category or content may not be blank - the creation
    /// invariant survives updates. Absent fields are fine.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref category) = self.category
            && category.trim().is_empty()
        {
            return Err(CoreError::validation("Category cannot be empty"));
        }
        if let Some(ref content) = self.content
            && content.trim().is_empty()
        {
            return Err(CoreError::validation("Content cannot be empty"));
        }
        Ok(())
    }
}
