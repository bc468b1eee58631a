mod announcement;
mod knowledge_entry;
mod knowledge_stats;
