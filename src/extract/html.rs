use std::sync::LazyLock;

use scraper::{Html, Selector};

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("head > title, title").expect("valid title selector"));

/// Parsed station page together with its raw text.
///
/// `Html` is not `Send`; build one, query it, and drop it without awaiting
/// in between.
pub struct StationDocument<'a> {
    raw: &'a str,
    html: Html,
}

impl<'a> StationDocument<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            html: Html::parse_document(raw),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// `content` of `<meta property=...>`, falling back to `<meta name=...>`
    pub fn meta(&self, property: &str) -> Option<String> {
        ["property", "name"].iter().find_map(|attr| {
            let selector = Selector::parse(&format!(r#"meta[{}="{}"]"#, attr, property)).ok()?;
            self.select_attr(&selector, "content")
        })
    }

    pub fn title(&self) -> Option<String> {
        self.select_text(&TITLE)
    }

    /// First non-blank `attr` among elements matching `selector`
    pub fn select_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.html
            .select(selector)
            .filter_map(|el| el.value().attr(attr))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    pub fn attrs(&self, selector: &Selector, attr: &str) -> Vec<String> {
        self.html
            .select(selector)
            .filter_map(|el| el.value().attr(attr))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    pub fn select_text(&self, selector: &Selector) -> Option<String> {
        self.html
            .select(selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .find(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <title> 감스트 | SOOP </title>
        <meta property="og:title" content="감스트">
        <meta name="description" content="station">
        </head><body>
        <div class="profile"><img src=" //stimg.sooplive.co.kr/LOGO/ga/gamst/gamst.jpg "></div>
        <a href="https://www.youtube.com/@gamst">yt</a>
        <a href="">empty</a>
        </body></html>"#;

    #[test]
    fn test_meta_lookup() {
        let doc = StationDocument::parse(PAGE);
        assert_eq!(doc.meta("og:title").as_deref(), Some("감스트"));
        assert_eq!(doc.meta("description").as_deref(), Some("station"));
        assert_eq!(doc.meta("og:image"), None);
    }

    #[test]
    fn test_title_and_attrs() {
        let doc = StationDocument::parse(PAGE);
        assert_eq!(doc.title().as_deref(), Some("감스트 | SOOP"));

        let img = Selector::parse(".profile img").unwrap();
        assert_eq!(
            doc.select_attr(&img, "src").as_deref(),
            Some("//stimg.sooplive.co.kr/LOGO/ga/gamst/gamst.jpg")
        );

        let anchors = Selector::parse("a[href]").unwrap();
        assert_eq!(doc.attrs(&anchors, "href"), vec!["https://www.youtube.com/@gamst"]);
        assert!(doc.raw().contains("stimg"));
    }
}
