pub mod announcement;
pub mod knowledge_entry;
pub mod knowledge_stats;
