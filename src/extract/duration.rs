//! VOD duration normalization.
//!
//! The listing endpoint reports `total_file_duration` in milliseconds.

/// Raw duration units per second
pub const DURATION_UNITS_PER_SECOND: u64 = 1000;

/// Duration in whole seconds plus its display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VodDuration {
    pub seconds: u64,
    pub display: String,
}

impl VodDuration {
    /// Convert a raw upstream value. Sub-second remainders are truncated.
    pub fn from_raw(raw: u64) -> Self {
        let seconds = raw / DURATION_UNITS_PER_SECOND;
        Self {
            seconds,
            display: format_clock(seconds),
        }
    }
}

/// `H:MM:SS` from one hour up, `M:SS` below
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_long_broadcast() {
        let duration = VodDuration::from_raw(12_139_600);
        assert_eq!(duration.seconds, 12_139);
        assert_eq!(duration.display, "3:22:19");
    }

    #[test]
    fn test_short_clip() {
        let duration = VodDuration::from_raw(65_000);
        assert_eq!(duration.seconds, 65);
        assert_eq!(duration.display, "1:05");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(VodDuration::from_raw(0).display, "0:00");
        assert_eq!(VodDuration::from_raw(999).seconds, 0);
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(3600), "1:00:00");
        assert_eq!(format_clock(36_000 + 61), "10:01:01");
    }

    proptest! {
        #[test]
        fn property_display_recomposes_seconds(raw in 0u64..1_000_000_000_000u64) {
            let duration = VodDuration::from_raw(raw);
            prop_assert_eq!(duration.seconds, raw / DURATION_UNITS_PER_SECOND);

            let parts: Vec<u64> = duration
                .display
                .split(':')
                .map(|p| p.parse().unwrap())
                .collect();
            let total = parts.iter().fold(0, |acc, p| acc * 60 + p);
            prop_assert_eq!(total, duration.seconds);
            prop_assert_eq!(parts.len() == 3, duration.seconds >= 3600);
        }
    }
}
