use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, GeminiConfig, LoggingConfig,
    ServerConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub gemini: GeminiConfig,
}

impl Config {
    /// Build the effective configuration: defaults, then `config.toml` from
    /// the config directory when present, then environment overrides on top.
    /// The config directory is created on first run.
    ///
    /// Validation is separate; call `validate()` on the result.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// The directory holding config.toml, the database and logs:
    /// `KB_CONFIG_DIR` when set, `./.kb/` otherwise.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("KB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Working directory is not accessible"))?;
        Ok(cwd.join(".kb"))
    }

    /// Check every section so a bad deployment fails at boot, not on the
    /// first request that needs the broken value.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.gemini.validate()?;

        // The database file must stay inside the config directory
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be a relative path without '..'",
            ));
        }

        Ok(())
    }

    /// Absolute database location under the config directory.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// One-line-per-section summary at startup. Secrets are reported as
    /// present or missing, never printed.
    pub fn log_summary(&self) {
        info!("Configuration:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        info!(
            "  auth: session secret {}",
            if self.auth.session_secret.is_some() {
                "configured"
            } else {
                "MISSING"
            }
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        info!(
            "  gemini: model={}, timeout={}s, context_limit={}, api key {}",
            self.gemini.model,
            self.gemini.timeout_secs,
            self.gemini.context_limit,
            if self.gemini.api_key.is_some() {
                "configured"
            } else {
                "not configured"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("KB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("KB_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("KB_DATABASE_PATH", &mut self.database.path);

        // Auth - SESSION_SECRET is the name the deployment environment sets
        Self::apply_env_option_string("SESSION_SECRET", &mut self.auth.session_secret);

        // Logging
        Self::apply_env_parse("KB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("KB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KB_LOG_FILE", &mut self.logging.file);

        // Gemini - the key comes from the environment only, never from TOML
        Self::apply_env_option_string("GEMINI_API_KEY", &mut self.gemini.api_key);
        Self::apply_env_string("KB_GEMINI_MODEL", &mut self.gemini.model);
        Self::apply_env_string("KB_GEMINI_BASE_URL", &mut self.gemini.api_base_url);
        Self::apply_env_parse("KB_GEMINI_TIMEOUT_SECS", &mut self.gemini.timeout_secs);
        Self::apply_env_parse("KB_GEMINI_CONTEXT_LIMIT", &mut self.gemini.context_limit);
    }

    /// Replace `target` when the variable is set.
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// "true" and "1" read as true; anything else set reads as false.
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Replace `target` when the variable is set and parses; an unparsable
    /// value leaves the existing one in place.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
