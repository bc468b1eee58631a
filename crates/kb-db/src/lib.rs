pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::announcement_repository::AnnouncementRepository;
pub use repositories::knowledge_repository::KnowledgeRepository;
