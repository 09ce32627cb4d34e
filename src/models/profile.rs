use serde::Serialize;

/// Links the station advertises. A missing link is `None`, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub cafe: Option<String>,
}

impl SocialLinks {
    /// Fill any empty slot from `other`, keeping what is already set
    pub fn or(self, other: SocialLinks) -> SocialLinks {
        SocialLinks {
            youtube: self.youtube.or(other.youtube),
            cafe: self.cafe.or(other.cafe),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.youtube.is_some() && self.cafe.is_some()
    }
}

/// Normalized broadcaster profile.
///
/// `nickname` is never empty (it falls back to `id`), and
/// `profile_image_url` is either empty or an absolute `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcasterProfile {
    pub id: String,
    pub nickname: String,
    pub profile_image_url: String,
    pub is_live: bool,
    pub opened_at: Option<String>,
    pub fan_count: u64,
    pub total_visit_count: u64,
    pub today_visit_count: u64,
    pub social_links: SocialLinks,
}
