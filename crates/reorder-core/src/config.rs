//! Dashboard Configuration
//!
//! Every field has a default, so partial JSON and missing build-time
//! variables are fine.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controller::ReorderOptions;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/admin";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub toast_duration_ms: u64,
    pub search_debounce_ms: u64,
    pub page_size: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: 10_000,
            toast_duration_ms: 3_000,
            search_debounce_ms: 400,
            page_size: 20,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Values baked in at compile time (`KMCC_API_URL`, `KMCC_REQUEST_TIMEOUT_MS`)
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(option_env!("KMCC_API_URL"), option_env!("KMCC_REQUEST_TIMEOUT_MS"))
    }

    fn from_vars(api_url: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = api_url {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = timeout_ms {
            config.request_timeout_ms = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                field: "request_timeout_ms",
                reason: format!("not a number: {:?}", raw),
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        let nonzero = [
            ("request_timeout_ms", self.request_timeout_ms),
            ("toast_duration_ms", self.toast_duration_ms),
            ("page_size", u64::from(self.page_size)),
        ];
        for (field, value) in nonzero {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn reorder_options(&self, label: &str) -> ReorderOptions {
        ReorderOptions {
            timeout: self.request_timeout(),
            ..ReorderOptions::labeled(label)
        }
    }
}
