use std::sync::Arc;

use super::endpoints::StationEndpoints;
use super::types::{StationResponse, VodPage};
use crate::error::{AppError, AppResult};
use crate::external::fetcher::Fetcher;

/// Typed access to the station endpoints over any [`Fetcher`].
#[derive(Clone)]
pub struct StationClient {
    fetcher: Arc<dyn Fetcher>,
    endpoints: StationEndpoints,
}

impl StationClient {
    pub fn new(fetcher: Arc<dyn Fetcher>, endpoints: StationEndpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub fn endpoints(&self) -> &StationEndpoints {
        &self.endpoints
    }

    /// Profile, statistics and live state. Required for every query.
    pub async fn station(&self, bj_id: &str) -> AppResult<StationResponse> {
        let url = self.endpoints.station_api(bj_id);
        let value = self.fetcher.fetch_json(&url).await?;
        serde_json::from_value(value).map_err(|e| {
            AppError::parse(
                &url,
                format!("unexpected station payload for {}: {}", bj_id, e),
                Some(e.into()),
            )
        })
    }

    /// Raw HTML of the station page
    pub async fn station_page(&self, bj_id: &str) -> AppResult<String> {
        self.fetcher
            .fetch_text(&self.endpoints.station_page(bj_id))
            .await
    }

    pub fn vod_pages<'a>(
        &'a self,
        bj_id: &'a str,
        per_page: u32,
        review_only: bool,
    ) -> StationVodPages<'a> {
        StationVodPages {
            client: self,
            bj_id,
            per_page,
            review_only,
        }
    }
}

/// Paged VOD listing for one broadcaster
pub struct StationVodPages<'a> {
    client: &'a StationClient,
    bj_id: &'a str,
    per_page: u32,
    review_only: bool,
}

impl StationVodPages<'_> {
    pub async fn fetch(&self, page: u32) -> AppResult<VodPage> {
        let url = self
            .client
            .endpoints
            .vod_list(self.bj_id, page, self.per_page, self.review_only);
        let value = self.client.fetcher.fetch_json(&url).await?;
        VodPage::from_value(value).ok_or_else(|| {
            AppError::parse(
                &url,
                format!("unexpected VOD list payload for {} page {}", self.bj_id, page),
                None,
            )
        })
    }
}
