//! # Configuration
//!
//! Precedence, lowest first:
//! 1. Built-in defaults
//! 2. Config file (`--config <path>`, or `cuptracker.toml` if present)
//! 3. Environment: `CUPTRACKER_URL`, `CUPTRACKER_TOKEN`, `CUPTRACKER_TIMEOUT_SECS`
//! 4. Command-line flags (`--url`, see [`Config::load_with_url`])
//!
//! ```toml
//! base_url = "https://cup.example.org"
//! token = "session-token"
//! timeout_secs = 5
//! ```

use crate::error::AppError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "cuptracker.toml";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Session token, sent as a Bearer credential.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Parse a config file from TOML text.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn read(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::parse(&text)
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; the default file is optional. `env` is
    /// the variable lookup, `std::env::var(..).ok()` in production.
    pub fn load(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        Self::load_with_url(path, env, None)
    }

    /// Load configuration and apply the `--url` flag on top.
    ///
    /// Only the final base URL is validated, so a valid flag replaces a
    /// malformed file or environment value.
    pub fn load_with_url(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
        url: Option<String>,
    ) -> Result<Self, AppError> {
        let file = match path {
            Some(path) => ConfigFile::read(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    ConfigFile::read(default)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        let mut config = Config::default();
        config.merge_file(file);
        config.merge_env(env)?;
        if let Some(url) = url {
            config.base_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    fn merge_file(&mut self, file: ConfigFile) {
        if let Some(url) = file.base_url {
            self.base_url = url;
        }
        if file.token.is_some() {
            self.token = file.token;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
    }

    fn merge_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), AppError> {
        if let Some(url) = env("CUPTRACKER_URL") {
            self.base_url = url;
        }
        if let Some(token) = env("CUPTRACKER_TOKEN") {
            self.token = Some(token);
        }
        if let Some(secs) = env("CUPTRACKER_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("CUPTRACKER_TIMEOUT_SECS '{}': {}", secs, e))
            })?;
            self.timeout = Duration::from_secs(secs);
        }
        Ok(())
    }

    fn validate(&mut self) -> Result<(), AppError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        self.base_url = trimmed.to_string();

        if self.timeout.is_zero() {
            return Err(AppError::Config("timeout must be at least 1 second".to_string()));
        }
        // An empty token means "not logged in", same as no token.
        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.token = None;
        }
        Ok(())
    }
}
