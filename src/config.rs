//! Centralized configuration management for fastcalls

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Endpoint serving one earnings-call transcript per (ticker, year, quarter).
pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com/v1/earningstranscript";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Transcript API credential, required for every request
    pub api_key: String,
    /// Transcript API endpoint
    pub base_url: String,
    /// Directory for archived transcripts
    pub transcript_dir: PathBuf,
    /// Rate limiting configuration
    pub rate_limits: RateLimits,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// Rate limiting configuration for the transcript API
#[derive(Debug, Clone)]
pub struct RateLimits {
    /// Delay after every transcript API call (milliseconds)
    pub api_delay_ms: u64,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self { api_delay_ms: 1000 }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "fastcalls/0.1.0".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults.
    ///
    /// The credential is the only required variable; everything else falls
    /// back to a default.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("API_KEY")
            .context("API_KEY not found in environment variables")?;

        let base_url = std::env::var("FASTCALLS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let transcript_dir = std::env::var("FASTCALLS_TRANSCRIPT_DIR")
            .unwrap_or_else(|_| "transcripts".to_string())
            .into();

        let rate_limits = RateLimits {
            api_delay_ms: parse_env_var("FASTCALLS_API_DELAY_MS")?.unwrap_or(1000),
        };

        let http = HttpConfig {
            timeout_seconds: parse_env_var("FASTCALLS_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("FASTCALLS_USER_AGENT")
                .unwrap_or_else(|_| "fastcalls/0.1.0".to_string()),
        };

        Ok(Config {
            api_key,
            base_url,
            transcript_dir,
            rate_limits,
            http,
        })
    }

    /// Get API call delay as Duration
    pub fn api_delay(&self) -> Duration {
        Duration::from_millis(self.rate_limits.api_delay_ms)
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}
