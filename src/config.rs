//! Runtime configuration loaded from environment variables.

use std::time::Duration;
use thiserror::Error;

const API_URL_KEY: &str = "TASKBOARD_API_URL";
const DRAG_DISTANCE_KEY: &str = "TASKBOARD_DRAG_ACTIVATION_DISTANCE";
const REQUEST_TIMEOUT_KEY: &str = "TASKBOARD_REQUEST_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_DRAG_DISTANCE: u32 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Board configuration.
///
/// | Env Var                              | Default                     |
/// |--------------------------------------|-----------------------------|
/// | `TASKBOARD_API_URL`                  | `http://localhost:8000/api` |
/// | `TASKBOARD_DRAG_ACTIVATION_DISTANCE` | `5`                         |
/// | `TASKBOARD_REQUEST_TIMEOUT_SECS`     | `30`                        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Base URL of the persistence API.
    pub api_base_url: String,
    /// Pointer travel needed before a press becomes a drag.
    pub drag_activation_distance: u32,
    /// Timeout applied to every persistence API request.
    pub request_timeout: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_owned(),
            drag_activation_distance: DEFAULT_DRAG_DISTANCE,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Raw value.
        value: String,
        /// Parse failure.
        reason: String,
    },
}

impl BoardConfig {
    /// Loads configuration from the process environment with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set to an
    /// unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`BoardConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let api_base_url = lookup(API_URL_KEY)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.api_base_url);
        let drag_activation_distance = parse_or(
            &lookup,
            DRAG_DISTANCE_KEY,
            defaults.drag_activation_distance,
        )?;
        let request_timeout = Duration::from_secs(parse_or(
            &lookup,
            REQUEST_TIMEOUT_KEY,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);

        Ok(Self {
            api_base_url,
            drag_activation_distance,
            request_timeout,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    value.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        value,
        reason: err.to_string(),
    })
}
