//! Service layer.
//!
//! Services coordinate the upstream client, the extraction pipeline and the
//! VOD collector on behalf of the HTTP handlers and the CLI.

mod station_service;
pub mod vod_collector;

pub use station_service::{QueryOptions, StationService};
pub use vod_collector::{CollectPlan, DateWindow, VodPageSource, collect_vods};

use std::sync::Arc;
use std::time::Duration;

use crate::config::Settings;
use crate::error::AppResult;
use crate::external::{Fetcher, HttpFetcher};

/// Aggregates all services for convenient access.
///
/// Used as Axum application state. Cloning is cheap.
#[derive(Clone)]
pub struct Services {
    pub station: StationService,
}

impl Services {
    /// Services backed by a real HTTP client
    pub fn new(settings: &Settings) -> AppResult<Self> {
        let fetcher = HttpFetcher::new(&settings.upstream)?;
        Ok(Self::with_fetcher(Arc::new(fetcher), settings))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, settings: &Settings) -> Self {
        Self {
            station: StationService::with_fetcher(
                fetcher,
                &settings.upstream,
                settings.collector.clone(),
                Duration::from_secs(settings.server.request_timeout),
            ),
        }
    }
}
