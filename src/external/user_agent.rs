use rand::seq::IndexedRandom;

/// Desktop browsers the station pages are known to render fully for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Firefox,
    Edge,
}

const CHROME_WINDOWS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36",
];

const FIREFOX_WINDOWS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:132.0) Gecko/20100101 Firefox/132.0",
];

const EDGE_WINDOWS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36 Edg/131.0.0.0",
];

impl Browser {
    fn agents(self) -> &'static [&'static str] {
        match self {
            Browser::Chrome => CHROME_WINDOWS,
            Browser::Firefox => FIREFOX_WINDOWS,
            Browser::Edge => EDGE_WINDOWS,
        }
    }
}

/// Random Windows User-Agent for `browser`
pub fn user_agent_for(browser: Browser) -> &'static str {
    browser
        .agents()
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(CHROME_WINDOWS[0])
}

/// User-Agent used when `upstream.user_agent` is not configured
pub fn default_user_agent() -> &'static str {
    user_agent_for(Browser::Chrome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_chrome_windows() {
        let ua = default_user_agent();
        assert!(ua.contains("Chrome/"));
        assert!(ua.contains("Windows"));
    }

    #[test]
    fn test_each_browser_has_matching_agent() {
        assert!(user_agent_for(Browser::Firefox).contains("Firefox/"));
        assert!(user_agent_for(Browser::Edge).contains("Edg/"));
    }
}
