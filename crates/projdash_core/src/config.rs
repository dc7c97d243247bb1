//! Runtime configuration for the dashboard core.
//!
//! # Responsibility
//! - Describe tunables (page size, loading delay, logging, demo seed).
//! - Parse them from JSON with defaults for every missing key.
//!
//! # Invariants
//! - A validated config always has `page_size >= 1`.
//! - `log_level` is one of `trace|debug|info|warn|error` once validated.

use crate::logging::{default_log_level, normalize_level};
use crate::pagination::{Paginator, DEFAULT_PAGE_SIZE};
use crate::view::DEFAULT_LOADING_DELAY;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Configuration load/validation failure.
#[derive(Debug)]
pub enum ConfigError {
    /// Input is not valid JSON for `DashboardConfig`.
    Parse(serde_json::Error),
    /// `page_size` must be at least 1.
    InvalidPageSize(usize),
    /// `log_level` is not a supported level name.
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid dashboard config: {err}"),
            Self::InvalidPageSize(value) => {
                write!(f, "page_size must be at least 1, got {value}")
            }
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidPageSize(_) | Self::InvalidLogLevel(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Rows per listing page.
    pub page_size: usize,
    /// Delay before the loading flag drops after a page fetch.
    pub loading_delay_ms: u64,
    pub log_level: String,
    /// Absolute directory for rolling log files. No file logging when unset.
    pub log_dir: Option<String>,
    /// Start from the bundled demo data set instead of an empty store.
    pub seed_demo_data: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE.get(),
            loading_delay_ms: u64::try_from(DEFAULT_LOADING_DELAY.as_millis()).unwrap_or(500),
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_demo_data: false,
        }
    }
}

impl DashboardConfig {
    /// Parses JSON and validates the result. Missing keys take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.page_size()?;
        normalize_level(&self.log_level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }

    pub fn page_size(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.page_size).ok_or(ConfigError::InvalidPageSize(self.page_size))
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Fresh paginator using the configured page size.
    pub fn paginator(&self) -> Result<Paginator, ConfigError> {
        Ok(Paginator::new(self.page_size()?))
    }
}
