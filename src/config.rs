//! Runtime configuration
//!
//! Settings are layered: built-in defaults, then the YAML config file,
//! then environment variables, then command-line flags.

use crate::error::{Error, Result};
use crate::types::OutputFormat;
use crate::wait::WaitPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Default API endpoint
pub const DEFAULT_API_URL: &str = "https://api.digitalocean.com";

/// Environment variable holding the access token
pub const ENV_ACCESS_TOKEN: &str = "OCEANCTL_ACCESS_TOKEN";

/// Environment variable overriding the API endpoint
pub const ENV_API_URL: &str = "OCEANCTL_API_URL";

// ============================================================================
// Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bearer token sent with every request
    pub access_token: Option<String>,

    /// API base URL
    pub api_url: String,

    /// Items requested per page when listing
    pub per_page: u32,

    /// Default output format
    pub output: OutputFormat,

    /// Polling settings for `--wait`
    pub wait: WaitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            per_page: crate::pagination::DEFAULT_PER_PAGE,
            output: OutputFormat::default(),
            wait: WaitConfig::default(),
        }
    }
}

/// Polling settings as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitConfig {
    /// Maximum lookups before giving up
    pub max_attempts: u32,
    /// Seconds between lookups
    pub delay_secs: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        let policy = WaitPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            delay_secs: policy.delay.as_secs(),
        }
    }
}

impl WaitConfig {
    /// Build the waiter policy these settings describe
    pub fn policy(&self) -> WaitPolicy {
        WaitPolicy::default()
            .with_max_attempts(self.max_attempts)
            .with_delay(Duration::from_secs(self.delay_secs))
    }
}

/// Overrides that win over the file and the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit access token
    pub access_token: Option<String>,
    /// Explicit API URL
    pub api_url: Option<String>,
    /// Explicit output format
    pub output: Option<OutputFormat>,
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("oceanctl").join("config.yaml"))
    }

    /// Parse a config from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {e}")))?;
        Self::from_yaml(&content)
    }

    /// Resolve the effective configuration
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_path() {
                Some(p) => Self::from_file(p)?,
                None => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);
        Ok(config)
    }

    /// Apply environment overrides using the given lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|t| !t.is_empty()) {
            self.access_token = Some(token);
        }
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(token) = overrides.access_token {
            self.access_token = Some(token);
        }
        if let Some(url) = overrides.api_url {
            self.api_url = url;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
    }

    /// Access token, or an error naming the missing field
    pub fn require_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::missing_field("access_token"))
    }

    fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(Error::config("per_page must be at least 1"));
        }
        if self.wait.max_attempts == 0 {
            return Err(Error::config("wait.max_attempts must be at least 1"));
        }
        url::Url::parse(&self.api_url)?;
        Ok(())
    }
}
