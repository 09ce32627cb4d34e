//! Paginated VOD collection with a date window.
//!
//! Pages are assumed newest-first. A record older than the window start
//! therefore ends the whole collection, while a record newer than the
//! window end is only skipped.

use async_trait::async_trait;
use jiff::civil::Date;
use tracing::{debug, info};

use crate::error::AppResult;
use crate::external::station::{StationEndpoints, StationVodPages, VodPage};
use crate::extract::normalize_records;
use crate::models::VodRecord;

/// Anything that can hand out numbered VOD pages, starting at 1
#[async_trait]
pub trait VodPageSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> AppResult<VodPage>;
}

#[async_trait]
impl<'a> VodPageSource for StationVodPages<'a> {
    async fn fetch_page(&self, page: u32) -> AppResult<VodPage> {
        self.fetch(page).await
    }
}

/// Inclusive date window, either bound optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDecision {
    Keep,
    /// Newer than the window, keep paging
    Skip,
    /// Older than the window, nothing further can match
    Stop,
}

impl DateWindow {
    pub fn new(start: Option<Date>, end: Option<Date>) -> Self {
        Self { start, end }
    }

    pub fn classify(&self, date: Date) -> WindowDecision {
        if self.start.is_some_and(|start| date < start) {
            WindowDecision::Stop
        } else if self.end.is_some_and(|end| date > end) {
            WindowDecision::Skip
        } else {
            WindowDecision::Keep
        }
    }
}

/// Parameters of one collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectPlan {
    pub max_pages: u32,
    pub per_page: u32,
    pub max_vods: Option<usize>,
    pub window: DateWindow,
    pub review_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    EmptyPage,
    LastPage,
    PageLimit,
    BeforeWindow,
    RecordLimit,
}

/// Fetch pages from 1 upward until one of the stop conditions holds.
///
/// A failed page fetch fails the collection; records gathered from earlier
/// pages are discarded with it.
pub async fn collect_vods<S>(
    source: &S,
    plan: &CollectPlan,
    endpoints: &StationEndpoints,
) -> AppResult<Vec<VodRecord>>
where
    S: VodPageSource + ?Sized,
{
    let mut vods = Vec::new();
    let mut pages = 0;
    let reason = 'pages: {
        for page in 1..=plan.max_pages {
            let batch = source.fetch_page(page).await?;
            pages = page;
            if batch.records.is_empty() {
                break 'pages StopReason::EmptyPage;
            }

            for record in normalize_records(batch.records, endpoints) {
                match plan.window.classify(record.date) {
                    WindowDecision::Stop => break 'pages StopReason::BeforeWindow,
                    WindowDecision::Skip => continue,
                    WindowDecision::Keep => vods.push(record),
                }
                if plan.max_vods.is_some_and(|cap| vods.len() >= cap) {
                    break 'pages StopReason::RecordLimit;
                }
            }

            if batch.last_page.is_some_and(|last| page >= last) {
                break 'pages StopReason::LastPage;
            }
        }
        StopReason::PageLimit
    };

    debug!(?reason, pages, "VOD pagination stopped");
    info!(count = vods.len(), pages, "VOD collection finished");
    Ok(vods)
}
