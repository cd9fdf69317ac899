//! Application Context
//!
//! Shared configuration and session provided via Leptos Context API.

use reorder_core::{ApiClient, DashboardConfig, Session};

/// Read-only app-wide settings provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: DashboardConfig,
    session: Session,
}

impl AppContext {
    pub fn new(config: DashboardConfig, session: Session) -> Self {
        Self { config, session }
    }

    /// Build the config from build-time variables, falling back to defaults
    pub fn from_build_env() -> Self {
        let config = DashboardConfig::from_build_env().unwrap_or_else(|e| {
            log::error!("[APP] invalid build config, using defaults: {}", e);
            DashboardConfig::default()
        });
        let session = option_env!("KMCC_API_TOKEN")
            .map(Session::with_token)
            .unwrap_or_else(Session::anonymous);
        Self::new(config, session)
    }

    /// Fresh REST client for the configured API and current session
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.api_base_url.clone(), self.session.clone())
    }
}
