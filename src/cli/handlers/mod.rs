//! Command handlers for CLI operations.

pub mod lookup;
pub mod serve;

pub use lookup::LookupCommandHandler;
pub use serve::ServeCommandHandler;
