//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `GETEMPS_*` environment variables and
//! configuration files. Optional fields fall back to defaults through the
//! accessors; [`AppSettings::validate`] rejects values the process cannot
//! start with.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::cache::DEFAULT_STATUS_TTL;
use crate::outbound::persistence::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, RetryPolicy};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CACHE_CLEANUP: Duration = Duration::from_secs(600);

/// Settings that cannot be used to start the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The bind address is not a socket address.
    #[error("invalid bind address {value:?}: {reason}")]
    BindAddr {
        /// Raw configured value.
        value: String,
        /// Parser message.
        reason: String,
    },
    /// No database URL was configured.
    #[error("database URL must be set")]
    MissingDatabaseUrl,
    /// The connection pool would hold no connections.
    #[error("pool size must be greater than zero")]
    ZeroPoolSize,
    /// Retry attempts include the first call and cannot be zero.
    #[error("retry attempts must be greater than zero")]
    ZeroRetryAttempts,
    /// Cached snapshots would expire as soon as they were written.
    #[error("cache TTL must be greater than zero")]
    ZeroCacheTtl,
}

/// Runtime configuration for the employee status service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GETEMPS")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
    /// Resolve every lookup without the status cache.
    #[ortho_config(default = false)]
    pub cache_disabled: bool,
    /// Lifetime of cached status snapshots in seconds.
    pub cache_ttl_secs: Option<u64>,
    /// Interval between in-memory cache sweeps in seconds.
    pub cache_cleanup_secs: Option<u64>,
    /// Redis URL; selects the Redis cache when set.
    pub redis_url: Option<String>,
    /// Database attempts per query, including the first.
    pub retry_attempts: Option<u32>,
    /// Delay before the first database retry in milliseconds.
    pub retry_backoff_ms: Option<u64>,
}

impl AppSettings {
    /// Return the configured bind address string, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Parse the bind address.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the value is not `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr();
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            reason: err.to_string(),
        })
    }

    /// Return the trimmed database URL, if one is configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Maximum pool size.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Pool checkout timeout.
    pub fn pool_timeout(&self) -> Duration {
        self.pool_timeout_secs
            .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs)
    }

    /// Whether lookups go through the status cache.
    pub fn cache_enabled(&self) -> bool {
        !self.cache_disabled
    }

    /// Cached snapshot lifetime.
    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl_secs
            .map_or(DEFAULT_STATUS_TTL, Duration::from_secs)
    }

    /// In-memory cache sweep interval.
    pub fn cache_cleanup_interval(&self) -> Duration {
        self.cache_cleanup_secs
            .map_or(DEFAULT_CACHE_CLEANUP, Duration::from_secs)
    }

    /// Return the trimmed Redis URL, if one is configured.
    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Retry policy for repository queries.
    pub fn retry_policy(&self) -> RetryPolicy {
        let attempts = self
            .retry_attempts
            .unwrap_or(RetryPolicy::DEFAULT_MAX_ATTEMPTS);
        let backoff = self
            .retry_backoff_ms
            .map_or(RetryPolicy::DEFAULT_INITIAL_BACKOFF, Duration::from_millis);
        RetryPolicy::new(attempts, backoff)
    }

    /// Check that the service can start with these settings.
    ///
    /// # Errors
    /// Returns the first [`SettingsError`] found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.socket_addr()?;
        if self.database_url().is_none() {
            return Err(SettingsError::MissingDatabaseUrl);
        }
        if self.pool_max_size() == 0 {
            return Err(SettingsError::ZeroPoolSize);
        }
        if self.retry_attempts == Some(0) {
            return Err(SettingsError::ZeroRetryAttempts);
        }
        if self.cache_ttl_secs == Some(0) {
            return Err(SettingsError::ZeroCacheTtl);
        }
        Ok(())
    }
}
