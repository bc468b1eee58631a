pub mod announcement;
pub mod api_key;
pub mod chat;
pub mod knowledge;

pub use announcement::{AnnouncementError, AnnouncementService};
pub use api_key::ApiKeyHandle;
pub use chat::{ChatError, ChatService};
pub use knowledge::{KnowledgeError, KnowledgeService};
