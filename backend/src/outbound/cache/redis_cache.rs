//! Redis-backed status cache using a `bb8-redis` connection pool.
//!
//! Keys are namespaced (`<prefix><status key>`) so several deployments can
//! share one Redis database. Each write applies the effective TTL plus up to
//! `jitter_fraction` of it again, spreading expiry of entries written
//! together.

use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::Pool;
use bb8_redis::redis;
use rand::Rng;

use crate::domain::StatusSnapshot;
use crate::domain::ports::{StatusCache, StatusCacheError, StatusCacheKey};

use super::{DEFAULT_STATUS_TTL, decode, effective_ttl, encode};

/// Connection and expiry settings for [`RedisStatusCache`].
#[derive(Debug, Clone, PartialEq)]
pub struct RedisCacheConfig {
    /// Redis connection URL, e.g. `redis://localhost:6379/0`.
    pub url: String,
    /// Prefix prepended to every key.
    pub key_prefix: String,
    /// TTL applied when callers pass zero.
    pub default_ttl: Duration,
    /// Upper bound on extra TTL as a fraction of the effective TTL.
    pub jitter_fraction: f64,
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// Pool checkout timeout.
    pub connection_timeout: Duration,
}

impl RedisCacheConfig {
    /// Configuration with the given URL and defaults for everything else.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key_prefix: "getemps:v1:".to_owned(),
            default_ttl: DEFAULT_STATUS_TTL,
            jitter_fraction: 0.1,
            max_connections: 8,
            connection_timeout: Duration::from_secs(2),
        }
    }

    /// Override the default TTL.
    #[must_use]
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
}

/// [`StatusCache`] implementation over Redis.
#[derive(Clone)]
pub struct RedisStatusCache {
    pool: Pool<RedisConnectionManager>,
    key_prefix: String,
    default_ttl: Duration,
    jitter_fraction: f64,
}

impl RedisStatusCache {
    /// Build the connection pool and check that the server answers `PING`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusCacheError::Backend`] when the URL is invalid, the
    /// pool cannot be built, or the server is unreachable.
    pub async fn connect(config: RedisCacheConfig) -> Result<Self, StatusCacheError> {
        let manager = RedisConnectionManager::new(config.url.as_str())
            .map_err(|err| StatusCacheError::backend(format!("invalid redis url: {err}")))?;
        let pool = Pool::builder()
            .max_size(config.max_connections)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| StatusCacheError::backend(err.to_string()))?;
        ping(&pool).await?;

        Ok(Self {
            pool,
            key_prefix: config.key_prefix,
            default_ttl: config.default_ttl,
            jitter_fraction: config.jitter_fraction,
        })
    }

    fn namespaced(&self, key: &StatusCacheKey) -> String {
        namespaced_key(&self.key_prefix, key)
    }
}

async fn ping(pool: &Pool<RedisConnectionManager>) -> Result<(), StatusCacheError> {
    // A dedicated connection fails fast instead of waiting out the pool timeout.
    let mut conn = pool
        .dedicated_connection()
        .await
        .map_err(|err| StatusCacheError::backend(format!("redis unreachable: {err}")))?;
    let _pong: String = redis::cmd("PING")
        .query_async(&mut conn)
        .await
        .map_err(|err| StatusCacheError::backend(format!("redis ping failed: {err}")))?;
    Ok(())
}

fn expiry_seconds(requested: Duration, default_ttl: Duration, jitter_fraction: f64) -> u64 {
    let base = effective_ttl(requested, default_ttl).as_secs().max(1);
    let max_extra = jitter_bound(base, jitter_fraction);
    if max_extra == 0 {
        return base;
    }
    base.saturating_add(rand::thread_rng().gen_range(0..=max_extra))
}

fn namespaced_key(prefix: &str, key: &StatusCacheKey) -> String {
    format!("{prefix}{}", key.as_str())
}

fn jitter_bound(base_secs: u64, fraction: f64) -> u64 {
    if !fraction.is_finite() || fraction <= 0.0 {
        return 0;
    }
    // Truncation toward zero keeps the bound conservative.
    (base_secs as f64 * fraction.min(1.0)) as u64
}

fn backend_error(err: impl std::fmt::Display) -> StatusCacheError {
    StatusCacheError::backend(err.to_string())
}

#[async_trait]
impl StatusCache for RedisStatusCache {
    async fn get(
        &self,
        key: &StatusCacheKey,
    ) -> Result<Option<StatusSnapshot>, StatusCacheError> {
        let mut conn = self.pool.get().await.map_err(backend_error)?;
        let payload: Option<String> = redis::cmd("GET")
            .arg(self.namespaced(key))
            .query_async(&mut *conn)
            .await
            .map_err(backend_error)?;
        payload.as_deref().map(decode).transpose()
    }

    async fn set(
        &self,
        key: &StatusCacheKey,
        snapshot: &StatusSnapshot,
        ttl: Duration,
    ) -> Result<(), StatusCacheError> {
        let payload = encode(snapshot)?;
        let mut conn = self.pool.get().await.map_err(backend_error)?;
        let () = redis::cmd("SET")
            .arg(self.namespaced(key))
            .arg(payload)
            .arg("EX")
            .arg(expiry_seconds(ttl, self.default_ttl, self.jitter_fraction))
            .query_async(&mut *conn)
            .await
            .map_err(backend_error)?;
        Ok(())
    }

    async fn delete(&self, key: &StatusCacheKey) -> Result<(), StatusCacheError> {
        let mut conn = self.pool.get().await.map_err(backend_error)?;
        let _removed: i64 = redis::cmd("DEL")
            .arg(self.namespaced(key))
            .query_async(&mut *conn)
            .await
            .map_err(backend_error)?;
        Ok(())
    }
}
