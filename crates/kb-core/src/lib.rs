pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::announcement::Announcement;
pub use models::knowledge_entry::{KnowledgeEntry, KnowledgeUpdate, NewKnowledgeEntry};
pub use models::knowledge_stats::KnowledgeStats;

pub use error_location::ErrorLocation;
