//! Status cache adapters.
//!
//! Both adapters store snapshots as JSON and honour the port's TTL rules:
//! a zero TTL falls back to the adapter's configured default.
//!
//! - [`InMemoryStatusCache`]: process-local `DashMap` with clock-driven
//!   expiry and an optional background janitor.
//! - [`RedisStatusCache`]: shared `bb8-redis` pool, namespaced keys and
//!   jittered `EX` expiry.

mod in_memory;
mod redis_cache;

pub use in_memory::InMemoryStatusCache;
pub use redis_cache::{RedisCacheConfig, RedisStatusCache};

use std::time::Duration;

use crate::domain::StatusSnapshot;
use crate::domain::ports::StatusCacheError;

/// Default entry lifetime used when callers pass a zero TTL.
pub const DEFAULT_STATUS_TTL: Duration = Duration::from_secs(300);

fn effective_ttl(requested: Duration, default_ttl: Duration) -> Duration {
    if requested.is_zero() {
        default_ttl
    } else {
        requested
    }
}

fn encode(snapshot: &StatusSnapshot) -> Result<String, StatusCacheError> {
    serde_json::to_string(snapshot).map_err(|err| StatusCacheError::serialization(err.to_string()))
}

fn decode(payload: &str) -> Result<StatusSnapshot, StatusCacheError> {
    serde_json::from_str(payload).map_err(|err| StatusCacheError::serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Duration::ZERO, DEFAULT_STATUS_TTL)]
    #[case(Duration::from_secs(30), Duration::from_secs(30))]
    fn zero_ttl_uses_default(#[case] requested: Duration, #[case] expected: Duration) {
        assert_eq!(effective_ttl(requested, DEFAULT_STATUS_TTL), expected);
    }

    #[rstest]
    fn malformed_payload_is_a_serialization_error() {
        let err = decode("{not json").expect_err("malformed");
        assert!(matches!(err, StatusCacheError::Serialization { .. }));
    }
}
