//! Configuration management module for bj-info
//!
//! Layered configuration loading:
//! 1. `default.toml` - Base default configuration
//! 2. `{environment}.toml` - Environment-specific configuration
//! 3. `local.toml` - Local overrides (not committed to version control)
//! 4. `BJINFO_*` environment variables
//!
//! Every setting has a built-in default, so all files are optional.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{CollectorConfig, Settings, UpstreamConfig};
