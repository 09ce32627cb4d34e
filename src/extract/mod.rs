//! Turning raw upstream data into normalized fields.
//!
//! Everything in here is synchronous. HTML documents are parsed, queried
//! and dropped inside a single call so they never cross an `.await`.

pub mod duration;
pub mod html;
pub mod live;
pub mod profile;
pub mod resolver;
pub mod social;
pub mod urls;
pub mod vod;

pub use duration::{DURATION_UNITS_PER_SECOND, VodDuration};
pub use html::StationDocument;
pub use live::LiveDetector;
pub use profile::build_profile;
pub use resolver::FieldResolver;
pub use vod::{RecordError, normalize_record, normalize_records};
