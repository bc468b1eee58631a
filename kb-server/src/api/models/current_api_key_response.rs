use serde::Serialize;

/// Current key payload. Unset is reported as success=false with HTTP 200,
/// not as an error.
#[derive(Debug, Serialize)]
pub struct CurrentApiKeyResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub api_key: String,
}
