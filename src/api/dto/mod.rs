//! Data Transfer Objects for API responses.

mod error;
mod health;
mod station;

pub use error::ErrorResponse;
pub use health::HealthResponse;
pub use station::{BjInfoFailure, BjInfoResponse, BjInfoSuccess, SocialLinksResponse, VodResponse};
