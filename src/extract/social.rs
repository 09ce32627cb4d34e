use std::sync::LazyLock;

use scraper::Selector;
use serde_json::Value;

use super::html::StationDocument;
use super::urls::{absolutize, is_absolute_http};
use crate::models::SocialLinks;

static ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Youtube,
    Cafe,
}

pub fn classify(url: &str) -> Option<SocialKind> {
    let host = url
        .split_once("://")
        .map_or(url, |(_, rest)| rest)
        .split(['/', '?', '#'])
        .next()?
        .to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    let host = host.strip_prefix("m.").unwrap_or(host);

    match host {
        "youtube.com" | "youtu.be" => Some(SocialKind::Youtube),
        "cafe.naver.com" | "cafe.daum.net" => Some(SocialKind::Cafe),
        _ => None,
    }
}

/// First link of each kind, in iteration order
pub fn collect<I, S>(urls: I) -> SocialLinks
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut links = SocialLinks::default();
    for raw in urls {
        let url = absolutize(raw.as_ref());
        if !is_absolute_http(&url) {
            continue;
        }
        let slot = match classify(&url) {
            Some(SocialKind::Youtube) => &mut links.youtube,
            Some(SocialKind::Cafe) => &mut links.cafe,
            None => continue,
        };
        if slot.is_none() {
            *slot = Some(url);
        }
        if links.is_complete() {
            break;
        }
    }
    links
}

/// Links advertised in the station API `links` section, whatever its shape
pub fn from_station_links(links: &Value) -> SocialLinks {
    let mut urls = Vec::new();
    string_leaves(links, &mut urls);
    collect(urls)
}

pub fn from_document(doc: &StationDocument<'_>) -> SocialLinks {
    collect(doc.attrs(&ANCHORS, "href"))
}

fn string_leaves<'v>(value: &'v Value, out: &mut Vec<&'v str>) {
    match value {
        Value::String(s) => out.push(s),
        Value::Array(items) => items.iter().for_each(|v| string_leaves(v, out)),
        Value::Object(map) => map.values().for_each(|v| string_leaves(v, out)),
        _ => {}
    }
}
