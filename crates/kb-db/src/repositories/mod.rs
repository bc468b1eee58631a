pub mod announcement_repository;
pub mod knowledge_repository;
