use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONTEXT_LIMIT, DEFAULT_GEMINI_BASE_URL,
    DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_TIMEOUT_SECS, MAX_GEMINI_TIMEOUT_SECS,
    MIN_GEMINI_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Initial API key. Sourced from the GEMINI_API_KEY environment
    /// variable (never from the TOML file); may be absent at boot and
    /// supplied later through the admin surface.
    #[serde(skip)]
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    /// Per-request timeout for completion calls.
    pub timeout_secs: u64,
    /// Max knowledge entries included in one prompt.
    pub context_limit: usize,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: String::from(DEFAULT_GEMINI_MODEL),
            api_base_url: String::from(DEFAULT_GEMINI_BASE_URL),
            timeout_secs: DEFAULT_GEMINI_TIMEOUT_SECS,
            context_limit: DEFAULT_CONTEXT_LIMIT,
        }
    }
}

impl GeminiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::gemini("gemini.model must not be empty"));
        }

        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::gemini("gemini.api_base_url must not be empty"));
        }

        if self.timeout_secs < MIN_GEMINI_TIMEOUT_SECS
            || self.timeout_secs > MAX_GEMINI_TIMEOUT_SECS
        {
            return Err(ConfigError::gemini(format!(
                "gemini.timeout_secs must be {}-{}, got {}",
                MIN_GEMINI_TIMEOUT_SECS, MAX_GEMINI_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.context_limit == 0 {
            return Err(ConfigError::gemini("gemini.context_limit must be >= 1"));
        }

        Ok(())
    }
}
