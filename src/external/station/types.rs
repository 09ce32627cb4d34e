use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of the station endpoint.
///
/// Every field is optional: the endpoint is undocumented and fields come and
/// go, so absence is handled by the resolver chains rather than here.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StationResponse {
    pub profile_image: Option<String>,
    pub station: Option<StationInfo>,
    /// `null` when offline, an object describing the broadcast when live
    pub broad: Option<Value>,
    /// Left untyped, social links are best-effort
    pub links: Option<Value>,
}

impl StationResponse {
    /// Whether the `broad` object is present and not a falsy placeholder
    pub fn has_active_broadcast(&self) -> bool {
        match &self.broad {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(_) => true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StationInfo {
    pub user_nick: Option<String>,
    pub station_open_date: Option<String>,
    /// Older payloads carry the opening date under this name
    pub jointime: Option<String>,
    pub upd: Option<StationStats>,
}

impl StationInfo {
    pub fn open_date(&self) -> Option<&str> {
        [self.station_open_date.as_deref(), self.jointime.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StationStats {
    #[serde(deserialize_with = "lenient_u64")]
    pub fan_cnt: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_visit_cnt: u64,
    #[serde(deserialize_with = "lenient_opt_u64")]
    pub today_visit_cnt: Option<u64>,
    #[serde(deserialize_with = "lenient_opt_u64")]
    pub today0_visit_cnt: Option<u64>,
}

impl StationStats {
    pub fn today_visits(&self) -> u64 {
        self.today_visit_cnt.or(self.today0_visit_cnt).unwrap_or(0)
    }
}

/// One page of the VOD listing endpoint.
///
/// Records stay raw so that each one can be normalized, or dropped, on its own.
#[derive(Debug, Default)]
pub struct VodPage {
    pub records: Vec<Value>,
    pub last_page: Option<u32>,
}

impl VodPage {
    /// Accepts `{data: [...], meta: {last_page}}` or a bare array.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(records) => Some(Self {
                records,
                last_page: None,
            }),
            Value::Object(mut map) => {
                let records = match map.remove("data") {
                    Some(Value::Array(records)) => records,
                    Some(Value::Null) | None => Vec::new(),
                    Some(_) => return None,
                };
                let last_page = map
                    .get("meta")
                    .and_then(|meta| meta.get("last_page"))
                    .and_then(Value::as_u64)
                    .and_then(|n| u32::try_from(n).ok());
                Some(Self { records, last_page })
            }
            _ => None,
        }
    }
}

/// A VOD record as the listing endpoint returns it.
///
/// `title_no`, `title_name`, `reg_date` and `ucc.thumb` are required: a
/// record missing any of them fails to deserialize and is dropped.
#[derive(Debug, Deserialize)]
pub struct RawVod {
    #[serde(deserialize_with = "title_number")]
    pub title_no: u64,
    pub title_name: String,
    pub reg_date: String,
    pub ucc: RawUcc,
    #[serde(default)]
    pub count: RawCount,
}

#[derive(Debug, Deserialize)]
pub struct RawUcc {
    pub thumb: String,
    /// Milliseconds, non-numeric values read as 0
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_file_duration: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCount {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub read_cnt: u64,
}

/// Numbers, numeric strings and floats are accepted; anything else is 0.
fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_u64(&value).unwrap_or(0))
}

fn lenient_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_u64(&value))
}

fn title_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_u64(&value)
        .filter(|n| *n > 0)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid title_no: {}", value)))
}

fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_station_response_tolerates_missing_sections() {
        let resp: StationResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.station.is_none());
        assert!(!resp.has_active_broadcast());
    }

    #[test]
    fn test_station_stats_accept_strings_and_aliases() {
        let resp: StationResponse = serde_json::from_value(json!({
            "station": {
                "user_nick": "감스트",
                "jointime": "2011-03-02 10:00:00",
                "upd": {"fan_cnt": "1,234", "total_visit_cnt": 99, "today0_visit_cnt": 7}
            }
        }))
        .unwrap();

        let station = resp.station.unwrap();
        assert_eq!(station.open_date(), Some("2011-03-02 10:00:00"));
        let stats = station.upd.unwrap();
        assert_eq!(stats.fan_cnt, 1234);
        assert_eq!(stats.total_visit_cnt, 99);
        assert_eq!(stats.today_visits(), 7);
    }

    #[test]
    fn test_broad_presence() {
        let live: StationResponse =
            serde_json::from_value(json!({"broad": {"broad_no": 281234567}})).unwrap();
        assert!(live.has_active_broadcast());

        let offline: StationResponse = serde_json::from_value(json!({"broad": null})).unwrap();
        assert!(!offline.has_active_broadcast());

        let placeholder: StationResponse = serde_json::from_value(json!({"broad": false})).unwrap();
        assert!(!placeholder.has_active_broadcast());
    }

    #[test]
    fn test_vod_page_shapes() {
        let page = VodPage::from_value(json!({"data": [1, 2], "meta": {"last_page": 3}})).unwrap();
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.last_page, Some(3));

        let bare = VodPage::from_value(json!([{"a": 1}])).unwrap();
        assert_eq!(bare.records.len(), 1);
        assert_eq!(bare.last_page, None);

        let empty = VodPage::from_value(json!({"data": null})).unwrap();
        assert!(empty.records.is_empty());

        assert!(VodPage::from_value(json!({"data": "oops"})).is_none());
        assert!(VodPage::from_value(json!("text")).is_none());
    }

    #[test]
    fn test_raw_vod_requires_core_fields() {
        let ok: Result<RawVod, _> = serde_json::from_value(json!({
            "title_no": "123",
            "title_name": "t",
            "reg_date": "2025-09-01 12:00:00",
            "ucc": {"thumb": "//x/y.jpg", "total_file_duration": "abc"}
        }));
        let vod = ok.unwrap();
        assert_eq!(vod.title_no, 123);
        assert_eq!(vod.ucc.total_file_duration, 0);
        assert_eq!(vod.count.read_cnt, 0);

        let missing_date: Result<RawVod, _> = serde_json::from_value(json!({
            "title_no": 1, "title_name": "t", "ucc": {"thumb": "x"}
        }));
        assert!(missing_date.is_err());

        let zero_title: Result<RawVod, _> = serde_json::from_value(json!({
            "title_no": 0, "title_name": "t", "reg_date": "2025-01-01", "ucc": {"thumb": "x"}
        }));
        assert!(zero_title.is_err());
    }
}
