//! Per-request result types of a station query.
//!
//! Nothing here outlives the request that built it.

mod profile;
mod query;
mod vod;

pub use profile::{BroadcasterProfile, SocialLinks};
pub use query::QueryResult;
pub use vod::VodRecord;
