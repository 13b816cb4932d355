//! Upstream weather provider configuration.
//!
//! The API credential is required; a missing credential is a fatal startup
//! condition, never a per-request error.

use std::env;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Configuration error raised during startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPEN_WEATHER_API_KEY environment variable is required")]
    MissingApiKey,
}

/// Configuration for the upstream OpenWeatherMap endpoint
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// API credential sent as the `appid` query parameter
    pub api_key: String,
    /// Current-weather endpoint URL
    pub base_url: String,
}

impl UpstreamConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `OPEN_WEATHER_API_KEY` must be set; `OPEN_WEATHER_BASE_URL` overrides
    /// the default endpoint (useful for pointing tests at a stub server).
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPEN_WEATHER_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = env::var("OPEN_WEATHER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    /// Replace the endpoint URL, keeping the credential
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_endpoint() {
        let config = UpstreamConfig::new("secret");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let config = UpstreamConfig::new("secret").with_base_url("http://127.0.0.1:9000/weather");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/weather");
    }
}
