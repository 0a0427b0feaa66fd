//! Configuration for stores and detail surfaces.
//!
//! Defaults: silent no-op on missing ids, modal surface, no simulated latency.
//! Values can come from JSON or from `DEALDESK_*` environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::MissingIdPolicy;

pub const ENV_MISSING_ID: &str = "DEALDESK_MISSING_ID";
pub const ENV_SURFACE_MODE: &str = "DEALDESK_SURFACE_MODE";
pub const ENV_LATENCY_MS: &str = "DEALDESK_LATENCY_MS";

/// Where the surface goes after a successful write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceMode {
    /// Close back to idle.
    #[default]
    Modal,
    /// Stay open on the record, showing refreshed data.
    Drawer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub mode: SurfaceMode,
    /// Delay before a submitted action is applied. Zero applies immediately.
    pub latency_ms: u64,
}

impl SurfaceConfig {
    pub fn modal() -> Self {
        Self {
            mode: SurfaceMode::Modal,
            latency_ms: 0,
        }
    }

    pub fn drawer() -> Self {
        Self {
            mode: SurfaceMode::Drawer,
            latency_ms: 0,
        }
    }

    pub fn with_mode(mut self, mode: SurfaceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub missing_id: MissingIdPolicy,
    pub surface: SurfaceConfig,
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults overridden by any `DEALDESK_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_MISSING_ID) {
            let normalized = value.trim().to_ascii_lowercase();
            config.missing_id = match normalized.as_str() {
                "ignore" => MissingIdPolicy::Ignore,
                "reject" => MissingIdPolicy::Reject,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_MISSING_ID,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(ENV_SURFACE_MODE) {
            let normalized = value.trim().to_ascii_lowercase();
            config.surface.mode = match normalized.as_str() {
                "modal" => SurfaceMode::Modal,
                "drawer" => SurfaceMode::Drawer,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_SURFACE_MODE,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(ENV_LATENCY_MS) {
            config.surface.latency_ms = match value.trim().parse() {
                Ok(ms) => ms,
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_LATENCY_MS,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
