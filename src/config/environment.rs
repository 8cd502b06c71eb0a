// ABOUTME: Environment configuration for store capacities and query defaults
// ABOUTME: Reads RUNLOG_* variables, validates them, and renders a startup summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::limits::{DEFAULT_QUERY_LIMIT, DEFAULT_STORE_MAX_SIZE};
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};

/// Feed store capacity
pub const FEED_MAX_SIZE_VAR: &str = "RUNLOG_FEED_MAX_SIZE";
/// Template store capacity (per template kind)
pub const TEMPLATE_MAX_SIZE_VAR: &str = "RUNLOG_TEMPLATE_MAX_SIZE";
/// Workout record store capacity
pub const RECORD_MAX_SIZE_VAR: &str = "RUNLOG_RECORD_MAX_SIZE";
/// Limit used when a query omits `limit`
pub const DEFAULT_QUERY_LIMIT_VAR: &str = "RUNLOG_DEFAULT_QUERY_LIMIT";
/// Deployment environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Capacity of each bounded store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLimits {
    /// Feed entries kept
    pub feed_max_size: usize,
    /// Templates kept per template kind
    pub template_max_size: usize,
    /// Workout records kept
    pub record_max_size: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            feed_max_size: DEFAULT_STORE_MAX_SIZE,
            template_max_size: DEFAULT_STORE_MAX_SIZE,
            record_max_size: DEFAULT_STORE_MAX_SIZE,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Store capacities
    pub stores: StoreLimits,
    /// Limit applied when a query omits `limit`
    pub default_query_limit: usize,
    /// Server name
    pub server_name: String,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            stores: StoreLimits::default(),
            default_query_limit: DEFAULT_QUERY_LIMIT,
            server_name: service_names::RUNLOG_SERVER.to_owned(),
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a size or limit is not a positive integer
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a size or limit is not a positive integer
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            environment: lookup(ENVIRONMENT_VAR)
                .map_or(defaults.environment, |v| Environment::from_str_or_default(&v)),
            stores: StoreLimits {
                feed_max_size: positive(&lookup, FEED_MAX_SIZE_VAR, DEFAULT_STORE_MAX_SIZE)?,
                template_max_size: positive(
                    &lookup,
                    TEMPLATE_MAX_SIZE_VAR,
                    DEFAULT_STORE_MAX_SIZE,
                )?,
                record_max_size: positive(&lookup, RECORD_MAX_SIZE_VAR, DEFAULT_STORE_MAX_SIZE)?,
            },
            default_query_limit: positive(&lookup, DEFAULT_QUERY_LIMIT_VAR, DEFAULT_QUERY_LIMIT)?,
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if any capacity or the default limit is zero
    pub fn validate(&self) -> AppResult<()> {
        let checks = [
            (FEED_MAX_SIZE_VAR, self.stores.feed_max_size),
            (TEMPLATE_MAX_SIZE_VAR, self.stores.template_max_size),
            (RECORD_MAX_SIZE_VAR, self.stores.record_max_size),
            (DEFAULT_QUERY_LIMIT_VAR, self.default_query_limit),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(AppError::config(format!("{name} must be greater than zero")));
            }
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} v{} ({}): feed max {}, template max {}, record max {}, default limit {}",
            self.server_name,
            self.server_version,
            self.environment,
            self.stores.feed_max_size,
            self.stores.template_max_size,
            self.stores.record_max_size,
            self.default_query_limit,
        )
    }
}

fn positive(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> AppResult<usize> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(AppError::config(format!("{key} must be greater than zero"))),
        Ok(value) => Ok(value),
        Err(e) => Err(AppError::config(format!("Invalid {key} value '{raw}'")).with_source(e)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use runlog_core::errors::ErrorCode;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.stores, StoreLimits::default());
        assert_eq!(config.default_query_limit, 20);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_overrides_are_read() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (FEED_MAX_SIZE_VAR, "5"),
            (RECORD_MAX_SIZE_VAR, " 7 "),
            (ENVIRONMENT_VAR, "prod"),
        ]))
        .unwrap();
        assert_eq!(config.stores.feed_max_size, 5);
        assert_eq!(config.stores.record_max_size, 7);
        assert_eq!(config.stores.template_max_size, 100);
        assert!(config.environment.is_production());
    }

    #[test]
    fn test_zero_and_garbage_rejected() {
        let zero = ServerConfig::from_lookup(lookup_from(&[(TEMPLATE_MAX_SIZE_VAR, "0")]));
        assert_eq!(zero.unwrap_err().code, ErrorCode::ConfigInvalid);

        let garbage = ServerConfig::from_lookup(lookup_from(&[(DEFAULT_QUERY_LIMIT_VAR, "lots")]));
        let error = garbage.unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.message.contains(DEFAULT_QUERY_LIMIT_VAR));
    }

    #[test]
    fn test_summary_mentions_limits() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("runlog-server"));
        assert!(summary.contains("default limit 20"));
    }
}
