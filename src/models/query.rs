use super::{BroadcasterProfile, VodRecord};

/// Outcome of one station query.
///
/// All-or-nothing: a failure never carries partial profile or VOD data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Success {
        profile: BroadcasterProfile,
        /// Upstream order, newest first, never re-sorted
        vods: Vec<VodRecord>,
    },
    Failure {
        message: String,
    },
}

impl QueryResult {
    pub fn failure(message: impl Into<String>) -> Self {
        QueryResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success { .. })
    }
}
