//! Single-city weather fetcher against the upstream provider.
//!
//! One outbound GET per call, no retries, no caching. Every failure mode is
//! terminal for that city and surfaces as a [`FetchError`]; the batch layer
//! decides what to do with it.

use crate::config::UpstreamConfig;
use crate::models::WeatherRecord;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

/// Failure modes of a single-city fetch
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to upstream failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned status {0}")]
    UpstreamStatus(StatusCode),

    #[error("failed to decode upstream body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[source] url::ParseError),
}

/// Seam between the HTTP layer and the upstream client.
///
/// Handlers and the batch fetcher depend on this trait, so tests can swap in
/// doubles without a network.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current weather for a single city
    async fn fetch_city(&self, city: &str) -> Result<WeatherRecord, FetchError>;
}

/// Upstream client holding the shared HTTP connection pool and credential
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: Client,
    config: UpstreamConfig,
}

impl WeatherService {
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Build the upstream request URL with the city and credential as query
    /// parameters
    fn request_url(&self, city: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.config.base_url).map_err(FetchError::InvalidUrl)?;
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("appid", &self.config.api_key);
        Ok(url)
    }
}

#[async_trait]
impl WeatherProvider for WeatherService {
    async fn fetch_city(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        let url = self.request_url(city)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UpstreamStatus(status));
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        serde_json::from_str(&body).map_err(FetchError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> WeatherService {
        WeatherService::new(UpstreamConfig::new("test-key"))
    }

    #[test]
    fn test_request_url_embeds_city_and_credential() {
        let url = service().request_url("Lahore").unwrap();
        assert_eq!(url.host_str(), Some("api.openweathermap.org"));
        assert_eq!(url.path(), "/data/2.5/weather");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("q".to_string(), "Lahore".to_string())));
        assert!(pairs.contains(&("appid".to_string(), "test-key".to_string())));
    }

    #[test]
    fn test_request_url_escapes_spaces() {
        let url = service().request_url("New York").unwrap();
        assert!(url.as_str().contains("q=New+York"));
    }

    #[test]
    fn test_request_url_rejects_bad_base() {
        let service =
            WeatherService::new(UpstreamConfig::new("test-key").with_base_url("not a url"));
        assert!(matches!(
            service.request_url("Lahore"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
