use serde::Serialize;

/// Create acknowledgement carrying the server-assigned id
#[derive(Debug, Serialize)]
pub struct CreateKnowledgeResponse {
    pub success: bool,
    pub id: String,
}
