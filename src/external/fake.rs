//! In-memory [`Fetcher`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};

use super::Fetcher;
use super::station::StationEndpoints;
use crate::error::{AppError, AppResult};

/// URL to body map; unknown URLs fail like a 404
#[derive(Default)]
pub struct FakeFetcher {
    bodies: HashMap<String, String>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn with(mut self, url: String, body: impl ToString) -> Self {
        self.bodies.insert(url, body.to_string());
        self
    }

    pub fn without(mut self, url: &str) -> Self {
        self.bodies.remove(url);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self, url: &str) -> bool {
        self.urls.lock().unwrap().iter().any(|u| u == url)
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch_text(&self, url: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| {
                let message = format!("HTTP status client error (404 Not Found) for url ({})", url);
                AppError::fetch(url, message, None)
            })
    }
}

fn vod(title_no: u64, day: &str) -> Value {
    json!({
        "title_no": title_no,
        "title_name": format!("다시보기 {}", title_no),
        "reg_date": format!("{} 20:00:00", day),
        "ucc": {"thumb": "//videoimg.sooplive.co.kr/t.jpg", "total_file_duration": 12139600},
        "count": {"read_cnt": 10}
    })
}

/// Broadcaster `gamst`: offline, a YouTube link on the station page and
/// three VODs over two pages, the last one dated 2025-08-31.
pub fn gamst_fixture() -> FakeFetcher {
    let e = StationEndpoints::default();
    FakeFetcher::default()
        .with(
            e.station_api("gamst"),
            json!({
                "profile_image": "//stimg.sooplive.co.kr/LOGO/ga/gamst/gamst.jpg",
                "station": {
                    "user_nick": "감스트",
                    "station_open_date": "2011-05-01 00:00:00",
                    "upd": {"fan_cnt": 5, "total_visit_cnt": 50, "today_visit_cnt": 2}
                },
                "broad": null
            }),
        )
        .with(
            e.station_page("gamst"),
            r#"<a href="https://www.youtube.com/@gamst">YouTube</a>"#,
        )
        .with(
            e.vod_list("gamst", 1, 20, false),
            json!({"data": [vod(3, "2025-09-03"), vod(2, "2025-09-02")]}),
        )
        .with(
            e.vod_list("gamst", 2, 20, false),
            json!({"data": [vod(1, "2025-08-31")]}),
        )
        .with(e.vod_list("gamst", 3, 20, false), json!({"data": []}))
}
