//! Application state for Axum web framework.

use std::sync::Arc;

use crate::config::Settings;
use crate::error::AppResult;
use crate::services::Services;

/// Shared services and settings, handed to every handler.
///
/// Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by a real HTTP client built from `settings.upstream`
    pub fn new(settings: Settings) -> AppResult<Self> {
        let services = Services::new(&settings)?;
        Ok(Self::with_services(services, settings))
    }

    pub fn with_services(services: Services, settings: Settings) -> Self {
        Self {
            services,
            settings: Arc::new(settings),
        }
    }
}
