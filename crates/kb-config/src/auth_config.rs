use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Session signing secret. No built-in fallback; the server refuses to
    /// boot without one.
    pub session_secret: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.session_secret {
            Some(ref secret) if !secret.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::auth(
                "auth.session_secret is required (set the SESSION_SECRET environment variable)",
            )),
        }
    }
}
