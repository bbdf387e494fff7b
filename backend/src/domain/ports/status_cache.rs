//! Port interface for caching computed employee status snapshots.
//!
//! Adapters own their own synchronisation and expiry. A `ttl` of
//! [`Duration::ZERO`] asks the adapter to apply its configured default; it
//! never means "keep forever".

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::StatusSnapshot;

use super::{StatusCacheKey, define_port_error};

define_port_error! {
    /// Errors surfaced by status cache adapters.
    pub enum StatusCacheError {
        /// Cache backend is unavailable or timing out.
        Backend { message: String } => "status cache backend failure: {message}",
        /// Serialisation or deserialisation of cached content failed.
        Serialization { message: String } => "status cache serialisation failed: {message}",
    }
}

/// Key-value store for status snapshots consulted before the database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusCache: Send + Sync {
    /// Read an unexpired snapshot for the given key.
    async fn get(
        &self,
        key: &StatusCacheKey,
    ) -> Result<Option<StatusSnapshot>, StatusCacheError>;

    /// Store a snapshot, replacing any previous entry under the key.
    async fn set(
        &self,
        key: &StatusCacheKey,
        snapshot: &StatusSnapshot,
        ttl: Duration,
    ) -> Result<(), StatusCacheError>;

    /// Remove an entry. Absent keys are not an error.
    async fn delete(&self, key: &StatusCacheKey) -> Result<(), StatusCacheError>;
}
