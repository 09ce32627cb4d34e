use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::duration::VodDuration;
use super::urls::{image_url, parse_date};
use crate::external::station::{RawVod, StationEndpoints};
use crate::models::VodRecord;

/// Why a single VOD record was dropped. Never leaves the collector.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed VOD record: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("unparseable registration date '{0}'")]
    Date(String),

    #[error("thumbnail '{0}' is not an http(s) URL")]
    Thumbnail(String),
}

pub fn normalize_record(
    raw: Value,
    endpoints: &StationEndpoints,
) -> Result<VodRecord, RecordError> {
    let vod: RawVod = serde_json::from_value(raw)?;
    let date = parse_date(&vod.reg_date).ok_or_else(|| RecordError::Date(vod.reg_date.clone()))?;
    let thumbnail_url =
        image_url(&vod.ucc.thumb).ok_or_else(|| RecordError::Thumbnail(vod.ucc.thumb.clone()))?;
    let duration = VodDuration::from_raw(vod.ucc.total_file_duration);

    Ok(VodRecord {
        title: vod.title_name,
        link: endpoints.vod_link(vod.title_no),
        thumbnail_url,
        duration_seconds: duration.seconds,
        duration_display: duration.display,
        view_count: vod.count.read_cnt,
        date,
    })
}

/// Normalize a page of records in order, skipping the ones that fail
pub fn normalize_records<'e>(
    records: Vec<Value>,
    endpoints: &'e StationEndpoints,
) -> impl Iterator<Item = VodRecord> + 'e {
    records
        .into_iter()
        .filter_map(move |raw| match normalize_record(raw, endpoints) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "Dropping VOD record");
                None
            }
        })
}
