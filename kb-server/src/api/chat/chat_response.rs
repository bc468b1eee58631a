use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    /// Generated answer, passed through verbatim
    pub response: String,
}
