use jiff::civil::Date;

/// One normalized entry of the VOD archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VodRecord {
    pub title: String,
    pub link: String,
    pub thumbnail_url: String,
    pub duration_seconds: u64,
    pub duration_display: String,
    pub view_count: u64,
    pub date: Date,
}
