use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::client::DashboardOptions;

/// Largest page size the backend's dashboard search accepts.
pub const MAX_PAGE_SIZE: u32 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    NotANumber { key: &'static str, value: String },

    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

/// Dashboard configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_url: String,
    pub page_size: u32,
    pub popular_limit: u32,
    pub request_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            page_size: 10,
            popular_limit: 6,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl DashboardConfig {
    /// Read `DASHBOARD_*` variables (after loading `.env` if present).
    /// Unset variables take their defaults; malformed ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_url = lookup("DASHBOARD_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_url);

        let page_size = number(
            &lookup,
            "DASHBOARD_PAGE_SIZE",
            defaults.page_size.into(),
            1,
            MAX_PAGE_SIZE.into(),
        )?;
        let popular_limit = number(
            &lookup,
            "DASHBOARD_POPULAR_LIMIT",
            defaults.popular_limit.into(),
            1,
            100,
        )?;
        let timeout_secs = number(
            &lookup,
            "DASHBOARD_REQUEST_TIMEOUT_SECS",
            defaults.request_timeout.as_secs(),
            1,
            600,
        )?;

        Ok(Self {
            api_url,
            // Bounded above, so the narrowing casts are lossless.
            page_size: page_size as u32,
            popular_limit: popular_limit as u32,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn options(&self) -> DashboardOptions {
        DashboardOptions {
            page_size: self.page_size,
            popular_limit: self.popular_limit,
        }
    }

    pub fn log_summary(&self) {
        tracing::info!(
            api_url = %self.api_url,
            page_size = self.page_size,
            popular_limit = self.popular_limit,
            timeout_secs = self.request_timeout.as_secs(),
            "Config loaded"
        );
    }
}

fn number(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u64,
    min: u64,
    max: u64,
) -> Result<u64, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value: u64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        key,
        value: raw.clone(),
    })?;
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
