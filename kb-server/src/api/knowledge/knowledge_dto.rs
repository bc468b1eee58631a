use kb_core::KnowledgeEntry;

use serde::Serialize;

/// Knowledge entry DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct KnowledgeDto {
    pub id: String,
    pub category: String,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<KnowledgeEntry> for KnowledgeDto {
    fn from(entry: KnowledgeEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            category: entry.category,
            title: entry.title,
            content: entry.content,
            created_at: entry.created_at.timestamp(),
            updated_at: entry.updated_at.timestamp(),
        }
    }
}
