//! Outbound access to the streaming platform.

pub mod client;
#[cfg(test)]
pub mod fake;
pub mod fetcher;
pub mod station;
pub mod user_agent;

pub use client::HttpFetcher;
pub use fetcher::Fetcher;
