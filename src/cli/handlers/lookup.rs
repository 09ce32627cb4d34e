//! Lookup command handler: one query, JSON on stdout.

use crate::api::dto::BjInfoResponse;
use crate::config::Settings;
use crate::services::{QueryOptions, Services};

pub struct LookupCommandHandler {
    services: Services,
}

impl LookupCommandHandler {
    pub fn new(config: &Settings) -> anyhow::Result<Self> {
        Ok(Self::with_services(Services::new(config)?))
    }

    pub fn with_services(services: Services) -> Self {
        Self { services }
    }

    /// Run the query and render the same body the HTTP route serves.
    /// The flag tells whether the query succeeded.
    pub async fn render(&self, id: &str, options: &QueryOptions) -> anyhow::Result<(String, bool)> {
        let result = self.services.station.handle(Some(id), options).await;
        let success = result.is_success();
        let body = serde_json::to_string(&BjInfoResponse::from(result))?;
        Ok((body, success))
    }

    pub async fn execute(&self, id: &str, options: &QueryOptions) -> anyhow::Result<bool> {
        let (body, success) = self.render(id, options).await?;
        println!("{}", body);
        Ok(success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::fake::{FakeFetcher, gamst_fixture};
    use std::sync::Arc;

    fn handler(fetcher: FakeFetcher) -> LookupCommandHandler {
        let services = Services::with_fetcher(Arc::new(fetcher), &Settings::default());
        LookupCommandHandler::with_services(services)
    }

    #[tokio::test]
    async fn test_render_success() {
        let (body, success) = handler(gamst_fixture())
            .render("gamst", &QueryOptions { limit: Some(1), ..QueryOptions::default() })
            .await
            .unwrap();

        assert!(success);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["nickname"], "감스트");
        assert_eq!(value["vods"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_render_failure() {
        let (body, success) = handler(FakeFetcher::default())
            .render("gamst", &QueryOptions::default())
            .await
            .unwrap();

        assert!(!success);
        assert!(body.starts_with(r#"{"success":false,"message":"#));
    }
}
