pub mod announcement;
pub mod chat;
pub mod error;
pub mod knowledge;
pub mod message_response;
pub mod models;
