use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateApiKeyRequest {
    #[serde(default)]
    pub api_key: String,
}
