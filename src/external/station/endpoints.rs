use crate::config::UpstreamConfig;

/// URL layout of the platform. The broadcaster id is interpolated verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationEndpoints {
    api_base: String,
    page_base: String,
    player_base: String,
}

impl StationEndpoints {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            api_base: trim_base(&config.station_api_base),
            page_base: trim_base(&config.station_page_base),
            player_base: trim_base(&config.vod_player_base),
        }
    }

    pub fn station_api(&self, bj_id: &str) -> String {
        format!("{}/{}/station", self.api_base, bj_id)
    }

    pub fn station_page(&self, bj_id: &str) -> String {
        format!("{}/{}", self.page_base, bj_id)
    }

    pub fn vod_list(&self, bj_id: &str, page: u32, per_page: u32, review_only: bool) -> String {
        let kind = if review_only { "review" } else { "all" };
        format!(
            "{}/{}/vods/{}?page={}&perPage={}&orderby=reg_date",
            self.api_base, bj_id, kind, page, per_page
        )
    }

    pub fn vod_link(&self, title_no: u64) -> String {
        format!("{}/{}", self.player_base, title_no)
    }
}

impl Default for StationEndpoints {
    fn default() -> Self {
        Self::new(&UpstreamConfig::default())
    }
}

fn trim_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}
