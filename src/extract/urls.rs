use jiff::civil::Date;

/// Give protocol-relative URLs an `https:` scheme, leave everything else alone
pub fn absolutize(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url.to_string()
    }
}

pub fn is_absolute_http(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Absolute `http(s)` form of an image reference, `None` for anything else
pub fn image_url(raw: &str) -> Option<String> {
    let url = absolutize(raw);
    is_absolute_http(&url).then_some(url)
}

/// Date portion of an upstream timestamp such as `2025-09-14 21:03:11`
pub fn date_part(timestamp: &str) -> &str {
    let timestamp = timestamp.trim();
    timestamp
        .split_once(' ')
        .map_or(timestamp, |(date, _)| date)
}

pub fn parse_date(timestamp: &str) -> Option<Date> {
    date_part(timestamp).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolutize() {
        assert_eq!(
            absolutize("//stimg.sooplive.co.kr/LOGO/ab/abc/abc.jpg"),
            "https://stimg.sooplive.co.kr/LOGO/ab/abc/abc.jpg"
        );
        assert_eq!(absolutize("http://a.b/c.png"), "http://a.b/c.png");
        assert_eq!(absolutize(" https://a.b/c.png "), "https://a.b/c.png");
    }

    #[test]
    fn test_image_url_rejects_relative() {
        assert_eq!(image_url("/img/x.png"), None);
        assert_eq!(image_url(""), None);
        assert_eq!(image_url("//a.b/x.png").as_deref(), Some("https://a.b/x.png"));
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2025-09-14 21:03:11"), "2025-09-14");
        assert_eq!(date_part("2025-09-14"), "2025-09-14");
        assert_eq!(parse_date("2025-09-14 21:03:11"), Some(jiff::civil::date(2025, 9, 14)));
        assert_eq!(parse_date("yesterday"), None);
    }
}
