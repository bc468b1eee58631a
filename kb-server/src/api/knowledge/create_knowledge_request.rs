use serde::Deserialize;

/// All fields default to empty so a missing field reads as blank and is
/// rejected by validation with a useful message instead of a parse error.
#[derive(Debug, Deserialize)]
pub struct CreateKnowledgeRequest {
    /// Grouping key for stats (required, non-empty)
    #[serde(default)]
    pub category: String,

    /// Optional display title
    #[serde(default)]
    pub title: String,

    /// Body text used as retrieval context (required, non-empty)
    #[serde(default)]
    pub content: String,
}
