//! Wire format of the broadcaster info endpoint.
//!
//! Field order here is the key order on the wire.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{BroadcasterProfile, QueryResult, SocialLinks, VodRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SocialLinksResponse {
    #[schema(example = "https://www.youtube.com/@example")]
    pub youtube: Option<String>,
    pub cafe: Option<String>,
}

impl From<SocialLinks> for SocialLinksResponse {
    fn from(links: SocialLinks) -> Self {
        Self {
            youtube: links.youtube,
            cafe: links.cafe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VodResponse {
    pub title: String,
    #[schema(example = "https://vod.sooplive.co.kr/player/151234567")]
    pub link: String,
    pub thumb: String,
    /// `H:MM:SS`, or `M:SS` under an hour
    #[schema(example = "3:22:19")]
    pub duration: String,
    #[schema(example = 12139)]
    pub duration_sec: u64,
    pub read_cnt: u64,
    #[schema(example = "2025-09-14")]
    pub date: String,
}

impl From<VodRecord> for VodResponse {
    fn from(vod: VodRecord) -> Self {
        Self {
            title: vod.title,
            link: vod.link,
            thumb: vod.thumbnail_url,
            duration: vod.duration_display,
            duration_sec: vod.duration_seconds,
            read_cnt: vod.view_count,
            date: vod.date.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BjInfoSuccess {
    #[schema(example = true)]
    pub success: bool,
    pub id: String,
    pub nickname: String,
    pub profile_img: String,
    pub is_live: bool,
    pub fan_cnt: u64,
    pub total_visit_cnt: u64,
    pub today_visit_cnt: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_open_date: Option<String>,
    pub social_links: SocialLinksResponse,
    pub vods: Vec<VodResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BjInfoFailure {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "ID parameter is missing")]
    pub message: String,
}

/// Body of `GET /api/bj_info`, success or failure, always served with 200
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum BjInfoResponse {
    Success(BjInfoSuccess),
    Failure(BjInfoFailure),
}

impl BjInfoResponse {
    pub fn success(profile: BroadcasterProfile, vods: Vec<VodRecord>) -> Self {
        BjInfoResponse::Success(BjInfoSuccess {
            success: true,
            id: profile.id,
            nickname: profile.nickname,
            profile_img: profile.profile_image_url,
            is_live: profile.is_live,
            fan_cnt: profile.fan_count,
            total_visit_cnt: profile.total_visit_count,
            today_visit_cnt: profile.today_visit_count,
            station_open_date: profile.opened_at,
            social_links: profile.social_links.into(),
            vods: vods.into_iter().map(VodResponse::from).collect(),
        })
    }

    pub fn failure(message: impl Into<String>) -> Self {
        BjInfoResponse::Failure(BjInfoFailure {
            success: false,
            message: message.into(),
        })
    }
}

impl From<QueryResult> for BjInfoResponse {
    fn from(result: QueryResult) -> Self {
        match result {
            QueryResult::Success { profile, vods } => Self::success(profile, vods),
            QueryResult::Failure { message } => Self::failure(message),
        }
    }
}
