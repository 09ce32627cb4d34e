mod client;
mod endpoints;
mod types;

pub use client::{StationClient, StationVodPages};
pub use endpoints::StationEndpoints;
pub use types::{RawVod, StationInfo, StationResponse, StationStats, VodPage};
