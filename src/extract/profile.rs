//! Profile fields, each resolved through an ordered chain of sources.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use super::html::StationDocument;
use super::live::LiveDetector;
use super::resolver::FieldResolver;
use super::social;
use super::urls::{date_part, image_url};
use crate::external::station::StationResponse;
use crate::models::{BroadcasterProfile, SocialLinks};

const SITE_NAMES: &[&str] = &["SOOP", "AfreecaTV", "아프리카TV", "숲"];
const TITLE_SEPARATORS: &[&str] = &[" | ", " - ", " : "];

const LIVE_BUTTON_MARKER: &str = r#"class="btn_broadcast on""#;
const LIVE_PLAYER_MARKER: &str = "player_live";

static PROFILE_IMAGE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".thumbnail img, #bjThumbnail img, .profile img")
        .expect("valid profile image selector")
});

static CDN_LOGO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:https?:)?//stimg\.(?:afreecatv|sooplive)\.(?:com|co\.kr)/LOGO/[^"'\s<>)]+"#)
        .expect("valid CDN logo regex")
});

static BROAD_NO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:nBroadNo|broad_no)["']?\s*[:=]\s*["']?(\d+)"#)
        .expect("valid broad number regex")
});

/// Everything the profile chains may read
pub struct ProfileSource<'a> {
    pub station: &'a StationResponse,
    pub page: Option<&'a StationDocument<'a>>,
}

impl ProfileSource<'_> {
    fn page_text(&self) -> &str {
        self.page.map_or("", |doc| doc.raw())
    }
}

pub fn nickname_resolver<'a>() -> FieldResolver<'a, ProfileSource<'a>> {
    FieldResolver::new("nickname")
        .strategy("api.user_nick", |src: &ProfileSource<'a>| {
            src.station.station.as_ref()?.user_nick.clone()
        })
        .strategy("page.og_title", |src: &ProfileSource<'a>| {
            src.page?.meta("og:title")
        })
        .strategy("page.title", |src: &ProfileSource<'a>| {
            src.page?.title().map(|t| strip_site_name(&t).to_string())
        })
}

pub fn profile_image_resolver<'a>() -> FieldResolver<'a, ProfileSource<'a>> {
    FieldResolver::new("profile_img")
        .strategy("api.profile_image", |src: &ProfileSource<'a>| {
            src.station.profile_image.as_deref().and_then(image_url)
        })
        .strategy("page.og_image", |src: &ProfileSource<'a>| {
            src.page?.meta("og:image").as_deref().and_then(image_url)
        })
        .strategy("page.profile_img", |src: &ProfileSource<'a>| {
            src.page?
                .attrs(&PROFILE_IMAGE, "src")
                .iter()
                .find_map(|src| image_url(src))
        })
        .strategy("page.cdn_scan", |src: &ProfileSource<'a>| {
            CDN_LOGO
                .find_iter(src.page_text())
                .find_map(|m| image_url(m.as_str()))
        })
}

pub fn live_detector<'a>() -> LiveDetector<'a, ProfileSource<'a>> {
    LiveDetector::new()
        .signal("api.broad", |src: &ProfileSource<'a>| {
            src.station.has_active_broadcast()
        })
        .signal("page.broadcast_button", |src: &ProfileSource<'a>| {
            src.page_text().contains(LIVE_BUTTON_MARKER)
        })
        .signal("page.player_live", |src: &ProfileSource<'a>| {
            src.page_text().contains(LIVE_PLAYER_MARKER)
        })
        .signal("page.broad_no", |src: &ProfileSource<'a>| {
            BROAD_NO
                .captures_iter(src.page_text())
                .filter_map(|c| c.get(1)?.as_str().parse::<u64>().ok())
                .any(|n| n > 0)
        })
}

/// Drop a trailing `<separator><site name>` suffix from a page title
pub fn strip_site_name(title: &str) -> &str {
    let title = title.trim();
    TITLE_SEPARATORS
        .iter()
        .find_map(|sep| {
            let (head, tail) = title.rsplit_once(sep)?;
            let tail = tail.trim();
            SITE_NAMES
                .iter()
                .any(|site| tail.eq_ignore_ascii_case(site))
                .then_some(head.trim())
        })
        .unwrap_or(title)
}

/// Assemble the profile for `bj_id` from the station payload and, when it
/// could be fetched, the raw station page. Social links stay empty unless
/// `with_social_links` is set.
pub fn build_profile(
    bj_id: &str,
    station: &StationResponse,
    page: Option<&str>,
    with_social_links: bool,
) -> BroadcasterProfile {
    let document = page.map(StationDocument::parse);
    let source = ProfileSource {
        station,
        page: document.as_ref(),
    };

    let nickname = nickname_resolver().resolve_or(&source, bj_id);
    let profile_image_url = profile_image_resolver().resolve_or(&source, "");
    let is_live = live_detector().is_live(&source);

    let social_links = if with_social_links {
        let api_links = api_social_links(station);
        match document.as_ref() {
            Some(doc) if !api_links.is_complete() => api_links.or(social::from_document(doc)),
            _ => api_links,
        }
    } else {
        SocialLinks::default()
    };

    let info = station.station.as_ref();
    let stats = info.and_then(|i| i.upd.as_ref());

    BroadcasterProfile {
        id: bj_id.to_string(),
        nickname,
        profile_image_url,
        is_live,
        opened_at: info
            .and_then(|i| i.open_date())
            .map(|d| date_part(d).to_string()),
        fan_count: stats.map_or(0, |s| s.fan_cnt),
        total_visit_count: stats.map_or(0, |s| s.total_visit_cnt),
        today_visit_count: stats.map_or(0, |s| s.today_visits()),
        social_links,
    }
}

/// Social links from the station payload alone
pub fn api_social_links(station: &StationResponse) -> SocialLinks {
    station
        .links
        .as_ref()
        .map(social::from_station_links)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn station(value: serde_json::Value) -> StationResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_strip_site_name() {
        assert_eq!(strip_site_name("감스트 | SOOP"), "감스트");
        assert_eq!(strip_site_name("감스트 - 아프리카TV"), "감스트");
        assert_eq!(strip_site_name("A - B : AfreecaTV"), "A - B");
        assert_eq!(strip_site_name("Tom - Jerry"), "Tom - Jerry");
        assert_eq!(strip_site_name("  plain  "), "plain");
        assert_eq!(strip_site_name("Tom - SOOPer"), "Tom - SOOPer");
        assert_eq!(strip_site_name("Tom | soop"), "Tom");
    }

    #[test]
    fn test_only_title_tag_is_stripped() {
        let station = StationResponse::default();
        let page = StationDocument::parse(r#"<meta property="og:title" content="Tom | SOOP">"#);
        let source = ProfileSource { station: &station, page: Some(&page) };
        assert_eq!(nickname_resolver().resolve(&source).as_deref(), Some("Tom | SOOP"));

        let page = StationDocument::parse("<title>Tom | SOOP</title>");
        let source = ProfileSource { station: &station, page: Some(&page) };
        assert_eq!(nickname_resolver().resolve(&source).as_deref(), Some("Tom"));
    }

    #[test]
    fn test_nickname_prefers_api() {
        let station = station(json!({"station": {"user_nick": "감스트"}}));
        let page = StationDocument::parse(r#"<meta property="og:title" content="other">"#);
        let source = ProfileSource { station: &station, page: Some(&page) };
        assert_eq!(nickname_resolver().resolve(&source).as_deref(), Some("감스트"));
    }

    #[test]
    fn test_nickname_falls_back_to_page_then_id() {
        let station = station(json!({"station": {"user_nick": ""}}));
        let page = StationDocument::parse("<html><head><title>감스트 | SOOP</title></head></html>");
        let source = ProfileSource { station: &station, page: Some(&page) };
        assert_eq!(nickname_resolver().resolve(&source).as_deref(), Some("감스트"));

        let profile = build_profile("gamst", &station, None, true);
        assert_eq!(profile.nickname, "gamst");
    }

    #[test]
    fn test_profile_image_chain() {
        let station = station(json!({
            "profile_image": "//stimg.sooplive.co.kr/LOGO/ga/gamst/gamst.jpg"
        }));
        let profile = build_profile("gamst", &station, None, true);
        assert_eq!(
            profile.profile_image_url,
            "https://stimg.sooplive.co.kr/LOGO/ga/gamst/gamst.jpg"
        );

        let empty = StationResponse::default();
        let page = r#"<script>var img = "//stimg.afreecatv.com/LOGO/ab/abc/abc.jpg";</script>"#;
        assert_eq!(
            build_profile("abc", &empty, Some(page), true).profile_image_url,
            "https://stimg.afreecatv.com/LOGO/ab/abc/abc.jpg"
        );

        let dom = r#"<div id="bjThumbnail"><img src="https://cdn.example/p.png"></div>"#;
        assert_eq!(
            build_profile("abc", &empty, Some(dom), true).profile_image_url,
            "https://cdn.example/p.png"
        );

        let bare = build_profile("abc", &empty, Some("<p>nothing</p>"), true);
        assert_eq!(bare.profile_image_url, "");
    }

    #[test]
    fn test_live_signals() {
        let offline = StationResponse::default();
        assert!(!build_profile("a", &offline, None, true).is_live);
        assert!(!build_profile("a", &offline, Some("var nBroadNo = 0;"), true).is_live);

        let button = r#"<a class="btn_broadcast on">"#;
        assert!(build_profile("a", &offline, Some(button), true).is_live);
        assert!(build_profile("a", &offline, Some("<div id=player_live>"), true).is_live);
        assert!(build_profile("a", &offline, Some(r#"{"broad_no": "281234567"}"#), true).is_live);

        let live = station(json!({"broad": {"broad_no": 1}}));
        assert!(build_profile("a", &live, None, true).is_live);
    }

    #[test]
    fn test_stats_and_open_date() {
        let station = station(json!({
            "station": {
                "user_nick": "n",
                "jointime": "2012-03-04 10:00:00",
                "upd": {"fan_cnt": "1,234", "total_visit_cnt": 99, "today0_visit_cnt": 7}
            }
        }));
        let profile = build_profile("n", &station, None, true);
        assert_eq!(profile.fan_count, 1234);
        assert_eq!(profile.total_visit_count, 99);
        assert_eq!(profile.today_visit_count, 7);
        assert_eq!(profile.opened_at.as_deref(), Some("2012-03-04"));

        let bare = build_profile("n", &StationResponse::default(), None, true);
        assert_eq!((bare.fan_count, bare.total_visit_count, bare.today_visit_count), (0, 0, 0));
        assert_eq!(bare.opened_at, None);
    }

    #[test]
    fn test_social_links_api_first() {
        let station = station(json!({"links": [{"url": "https://www.youtube.com/@api"}]}));
        let page = concat!(
            r#"<a href="https://youtube.com/@page">y</a>"#,
            r#"<a href="https://cafe.naver.com/c">c</a>"#,
        );
        let links = build_profile("a", &station, Some(page), true).social_links;
        assert_eq!(links.youtube.as_deref(), Some("https://www.youtube.com/@api"));
        assert_eq!(links.cafe.as_deref(), Some("https://cafe.naver.com/c"));

        assert_eq!(api_social_links(&station).cafe, None);
    }

    #[test]
    fn test_page_fallbacks_without_social_links() {
        let page = concat!(
            r#"<meta property="og:title" content="Real Nick">"#,
            r#"<meta property="og:image" content="//stimg.sooplive.co.kr/LOGO/ab/abc/abc.jpg">"#,
            r#"<div id="player_live"></div>"#,
            r#"<a href="https://www.youtube.com/@abc">y</a>"#,
        );
        let profile = build_profile("abc", &StationResponse::default(), Some(page), false);
        assert_eq!(profile.nickname, "Real Nick");
        assert_eq!(
            profile.profile_image_url,
            "https://stimg.sooplive.co.kr/LOGO/ab/abc/abc.jpg"
        );
        assert!(profile.is_live);
        assert_eq!(profile.social_links, SocialLinks::default());
    }
}
