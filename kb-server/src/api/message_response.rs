use serde::Serialize;

/// Plain acknowledgement body shared by update, delete and config endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
