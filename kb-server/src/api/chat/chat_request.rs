use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message; blank is rejected before any upstream call
    #[serde(default)]
    pub message: String,
}
