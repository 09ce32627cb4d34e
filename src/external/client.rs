use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER};

use super::fetcher::Fetcher;
use super::user_agent::default_user_agent;
use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};

/// [`Fetcher`] backed by a `reqwest::Client`.
///
/// The client is built once per service from [`UpstreamConfig`]:
/// - **Timeout**: `timeout_secs` covers connect and body, there is no retry
/// - **Headers**: browser-like User-Agent, `Referer` and `Accept-Language`
/// - **Compression**: gzip, deflate, brotli and zstd
/// - **TLS**: Rustls
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        insert_header(&mut headers, REFERER, &config.referer)?;
        insert_header(&mut headers, ACCEPT_LANGUAGE, &config.accept_language)?;

        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| default_user_agent().to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .zstd(true)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Configuration {
                key: "upstream".to_string(),
                source: e.into(),
            })?;

        Ok(Self { client })
    }
}

fn insert_header(
    headers: &mut HeaderMap,
    name: reqwest::header::HeaderName,
    value: &str,
) -> AppResult<()> {
    if value.is_empty() {
        return Ok(());
    }
    let value = HeaderValue::from_str(value).map_err(|e| AppError::Configuration {
        key: format!("upstream.{}", name.as_str().replace('-', "_")),
        source: e.into(),
    })?;
    headers.insert(name, value);
    Ok(())
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> AppResult<String> {
        tracing::debug!(url = %url, "Fetching upstream resource");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                AppError::fetch(url, format!("request to {} failed: {}", url, e), Some(e.into()))
            })?
            .error_for_status()
            .map_err(|e| {
                AppError::fetch(url, format!("HTTP error from {}: {}", url, e), Some(e.into()))
            })?;

        resp.text().await.map_err(|e| {
            let message = format!("failed to read body from {}: {}", url, e);
            AppError::fetch(url, message, Some(e.into()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(HttpFetcher::new(&UpstreamConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_header_value_is_configuration_error() {
        let config = UpstreamConfig {
            referer: "bad\nvalue".to_string(),
            ..UpstreamConfig::default()
        };
        match HttpFetcher::new(&config) {
            Err(AppError::Configuration { key, .. }) => assert_eq!(key, "upstream.referer"),
            Err(other) => panic!("Expected Configuration error, got {:?}", other),
            Ok(_) => panic!("Expected Configuration error"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        let fetcher = HttpFetcher::new(&UpstreamConfig {
            timeout_secs: 1,
            ..UpstreamConfig::default()
        })
        .unwrap();

        let err = fetcher.fetch_text("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamFetch { .. }));
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_fetch_real_station_page() {
        let fetcher = HttpFetcher::new(&UpstreamConfig::default()).unwrap();
        let body = fetcher.fetch_text("https://ch.sooplive.co.kr/").await;
        assert!(body.is_ok());
    }
}
