//! Application configuration
//!
//! Mock latencies and the request deadline live here rather than being
//! hardcoded into store or service logic. Loaded from an optional TOML
//! file; every field has a default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Artificial delay for mock sign-in/sign-up, in milliseconds.
    pub identity_latency_ms: u64,
    /// Artificial delay for the mock payment processor, in milliseconds.
    pub payment_latency_ms: u64,
    /// Deadline applied by callers to every external-service call.
    pub request_timeout_ms: u64,
    /// Boot with the seeded demo session instead of an anonymous one.
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            identity_latency_ms: 400,
            payment_latency_ms: 2000,
            request_timeout_ms: 10_000,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load from `path` when given, falling back to defaults on a missing
    /// file or parse failure (logged, never fatal).
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "falling back to default config");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    pub fn identity_latency(&self) -> Duration {
        Duration::from_millis(self.identity_latency_ms)
    }

    pub fn payment_latency(&self) -> Duration {
        Duration::from_millis(self.payment_latency_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
