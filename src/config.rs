//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request
//! is made. A `.env` file is honoured when the binary calls `dotenvy::dotenv()`.
//!
//! ```bash
//! export ARTWORKS_API_URL="https://api.artic.edu/api/v1/artworks"
//! export DEFAULT_PAGE_SIZE="12"
//! ```
//!
//! ## Optional Variables
//!
//! - `ARTWORKS_API_URL` - List endpoint (default: `https://api.artic.edu/api/v1/artworks`)
//! - `DEFAULT_PAGE_SIZE` - Initial rows per page, one of 6 or 12 (default: 6)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 30)
//! - `USER_AGENT` - Sent with every request (default: `artwork-picker/<version>`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::domain::pagination::{DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};
use anyhow::Result;
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub default_page_size: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_page_size: DEFAULT_ROWS_PER_PAGE,
            request_timeout_secs: 30,
            user_agent: default_user_agent(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// Unparseable numeric values fall back to their defaults; use
    /// [`Config::validate`] to reject out-of-range values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = env::var("ARTWORKS_API_URL").unwrap_or(defaults.api_url);

        let default_page_size = env::var("DEFAULT_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.default_page_size);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout_secs);

        let user_agent = env::var("USER_AGENT").unwrap_or(defaults.user_agent);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            api_url,
            default_page_size,
            request_timeout_secs,
            user_agent,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_url` is not an `http://` or `https://` URL
    /// - `default_page_size` is not one of the rows-per-page options
    /// - `request_timeout_secs` is 0
    /// - `user_agent` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api_url)
            .map_err(|e| anyhow::anyhow!("ARTWORKS_API_URL is invalid ({e}): '{}'", self.api_url))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "ARTWORKS_API_URL must start with 'http://' or 'https://', got '{}'",
                self.api_url
            );
        }

        if !ROWS_PER_PAGE_OPTIONS.contains(&self.default_page_size) {
            anyhow::bail!(
                "DEFAULT_PAGE_SIZE must be one of {:?}, got {}",
                ROWS_PER_PAGE_OPTIONS,
                self.default_page_size
            );
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("USER_AGENT must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Artworks endpoint: {}", self.api_url);
        tracing::info!("  Default page size: {}", self.default_page_size);
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  User agent: {}", self.user_agent);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
