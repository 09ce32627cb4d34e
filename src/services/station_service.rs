//! One broadcaster query, end to end.

use std::sync::Arc;
use std::time::Duration;

use jiff::civil::Date;
use tracing::{Instrument, error, info, info_span, warn};

use super::vod_collector::{CollectPlan, DateWindow, collect_vods};
use crate::config::{CollectorConfig, UpstreamConfig};
use crate::error::{AppError, AppResult};
use crate::external::Fetcher;
use crate::external::station::{StationClient, StationEndpoints};
use crate::extract::build_profile;
use crate::models::{BroadcasterProfile, QueryResult, VodRecord};

/// Per-request overrides of the collector defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<usize>,
    pub review: Option<bool>,
}

impl QueryOptions {
    /// Merge with `defaults` into a collection plan
    pub fn plan(&self, defaults: &CollectorConfig) -> AppResult<CollectPlan> {
        let start = window_date("start_date", pick(&self.start_date, &defaults.start_date))?;
        let end = window_date("end_date", pick(&self.end_date, &defaults.end_date))?;
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(AppError::invalid_parameter(
                    "start_date",
                    format!("{} is after end_date {}", start, end),
                ));
            }
        }

        let max_vods = self.limit.or(defaults.max_vods);
        if max_vods == Some(0) {
            return Err(AppError::invalid_parameter("limit", "must be greater than 0"));
        }

        Ok(CollectPlan {
            max_pages: defaults.max_pages,
            per_page: defaults.per_page,
            max_vods,
            window: DateWindow::new(start, end),
            review_only: self.review.unwrap_or(defaults.review_only),
        })
    }
}

fn pick<'a>(request: &'a Option<String>, default: &'a Option<String>) -> Option<&'a str> {
    request
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or(default.as_deref())
}

fn window_date(name: &str, raw: Option<&str>) -> AppResult<Option<Date>> {
    raw.map(|raw| {
        raw.parse::<Date>().map_err(|e| {
            AppError::invalid_parameter(name, format!("'{}' is not YYYY-MM-DD: {}", raw, e))
        })
    })
    .transpose()
}

/// Answers broadcaster queries against the platform.
///
/// Cheap to clone; clones share the HTTP client. A query that outlives
/// `budget` is abandoned and reported as a failure.
#[derive(Clone)]
pub struct StationService {
    client: StationClient,
    collector: Arc<CollectorConfig>,
    budget: Duration,
}

impl StationService {
    pub fn new(client: StationClient, collector: CollectorConfig, budget: Duration) -> Self {
        Self {
            client,
            collector: Arc::new(collector),
            budget,
        }
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher>,
        upstream: &UpstreamConfig,
        collector: CollectorConfig,
        budget: Duration,
    ) -> Self {
        Self::new(
            StationClient::new(fetcher, StationEndpoints::new(upstream)),
            collector,
            budget,
        )
    }

    /// Run one query. Never fails: every error becomes a failure result.
    pub async fn handle(&self, bj_id: Option<&str>, options: &QueryOptions) -> QueryResult {
        let bj_id = bj_id.map(str::trim).unwrap_or_default();
        let span = info_span!("station_query", bj_id);

        async {
            let outcome = tokio::time::timeout(self.budget, self.query(bj_id, options))
                .await
                .unwrap_or_else(|_| Err(AppError::query_timeout(self.budget)));
            match outcome {
                Ok((profile, vods)) => {
                    info!(is_live = profile.is_live, vods = vods.len(), "Station query succeeded");
                    QueryResult::Success { profile, vods }
                }
                Err(e) => {
                    error!(error = %e, "Station query failed");
                    QueryResult::failure(e.to_string())
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn query(
        &self,
        bj_id: &str,
        options: &QueryOptions,
    ) -> AppResult<(BroadcasterProfile, Vec<VodRecord>)> {
        if bj_id.is_empty() {
            return Err(AppError::missing_parameter("ID"));
        }
        let plan = options.plan(&self.collector)?;

        let station = self.client.station(bj_id).await?;
        let page = if self.collector.station_page {
            match self.client.station_page(bj_id).await {
                Ok(page) => Some(page),
                Err(e) => {
                    warn!(error = %e, "Station page unavailable, continuing without it");
                    None
                }
            }
        } else {
            None
        };
        let profile = build_profile(
            bj_id,
            &station,
            page.as_deref(),
            self.collector.social_links,
        );

        let pages = self.client.vod_pages(bj_id, plan.per_page, plan.review_only);
        let vods = collect_vods(&pages, &plan, self.client.endpoints()).await?;

        Ok((profile, vods))
    }
}
