use crate::Result;
use camino::Utf8Path;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use url::Url;

/// The default index configuration TOML content, embedded from `default_index.toml`
pub const DEFAULT_INDEX_TOML: &str = include_str!("../../default_index.toml");

/// Where and how to reach the package index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Base URL of the JSON API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum time to wait for a single HTTP request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://pypi.org/pypi".to_string()
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("release-tally/", env!("CARGO_PKG_VERSION")).to_string()
}

impl IndexConfig {
    /// Creates a configuration with default settings that talks to `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or holds invalid values
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading index configuration file '{path}'"))?;
        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing index configuration file '{path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_INDEX_TOML).into_app_err_with(|| format!("writing default index configuration to {output_path}"))?;
        Ok(())
    }

    /// Parses and checks the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, is not http(s), or cannot carry path segments
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url).into_app_err_with(|| format!("parsing base_url '{}'", self.base_url))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(app_err!("base_url must be an http or https URL, got '{}'", self.base_url));
        }

        if url.cannot_be_a_base() {
            return Err(app_err!("base_url '{}' cannot be used as a base URL", self.base_url));
        }

        Ok(url)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is unusable or the request timeout is zero
    pub fn validate(&self) -> Result<()> {
        let _ = self.base_url()?;

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(app_err!("user_agent must not be empty"));
        }

        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_INDEX_TOML).expect("default_index.toml should be valid TOML that deserializes to IndexConfig")
    }
}
