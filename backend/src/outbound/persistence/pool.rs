//! Async connection pool for Diesel PostgreSQL connections.
//!
//! Wraps `diesel-async` and `bb8`. Checkout is non-blocking and bounded by
//! the configured timeout. Pool failures surface as [`PoolError`], which
//! repositories translate into their port's connection variant.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Default upper bound on open connections.
pub const DEFAULT_MAX_SIZE: u32 = 10;
/// Default checkout timeout.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available within the checkout timeout.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool could not be constructed.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// Consume the error, returning its message.
    pub fn into_message(self) -> String {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use getemps::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://getemps@localhost/getemps")
///     .with_max_size(20)
///     .with_connection_timeout(Duration::from_secs(2));
/// assert_eq!(config.max_size(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a configuration with [`DEFAULT_MAX_SIZE`] connections, no idle
    /// floor and [`DEFAULT_CONNECTION_TIMEOUT`].
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            min_idle: None,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    /// Set the maximum number of connections in the pool.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the minimum number of idle connections to maintain.
    #[must_use]
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Maximum pool size.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Checkout timeout.
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

/// Async connection pool for PostgreSQL via Diesel.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build a pool from `config`.
    ///
    /// Connections are opened lazily, so an unreachable database surfaces on
    /// first checkout rather than here.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] if the pool cannot be constructed.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check out a connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] if no connection is available within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_config_defaults() {
        let config = PoolConfig::new("postgres://localhost/getemps");

        assert_eq!(config.database_url(), "postgres://localhost/getemps");
        assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(config.min_idle, None);
        assert_eq!(config.connection_timeout(), DEFAULT_CONNECTION_TIMEOUT);
    }

    #[rstest]
    fn pool_config_builder_overrides() {
        let config = PoolConfig::new("postgres://localhost/getemps")
            .with_max_size(4)
            .with_min_idle(Some(1))
            .with_connection_timeout(Duration::from_millis(250));

        assert_eq!(config.max_size(), 4);
        assert_eq!(config.min_idle, Some(1));
        assert_eq!(config.connection_timeout(), Duration::from_millis(250));
    }

    #[rstest]
    #[case(PoolError::checkout("timed out"), "timed out")]
    #[case(PoolError::build("invalid URL"), "invalid URL")]
    fn pool_error_keeps_message(#[case] err: PoolError, #[case] message: &str) {
        assert!(err.to_string().contains(message));
        assert_eq!(err.into_message(), message);
    }
}
