//! Request-scoped trace identifier for correlation across logs and errors.
//!
//! The identifier lives in tokio task-local storage. Task-locals are not
//! inherited by spawned tasks, so detached work (such as the status cache
//! populate step) must be wrapped with [`TraceId::propagate`] before it is
//! handed to `tokio::spawn`.

use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static TRACE_ID: TraceId;
}

/// Per-request trace identifier exposed via task-local storage.
///
/// # Examples
/// ```
/// use getemps::domain::TraceId;
///
/// async fn handler() {
///     if let Some(id) = TraceId::current() {
///         tracing::info!(trace_id = %id, "handling request");
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Generate a new random trace identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the current trace identifier if one is in scope.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Execute the provided future with the supplied trace identifier in scope.
    ///
    /// # Examples
    /// ```
    /// use getemps::domain::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let trace_id = TraceId::generate();
    /// let observed = TraceId::scope(trace_id, async move { TraceId::current() }).await;
    /// assert_eq!(observed, Some(trace_id));
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }

    /// Carry the caller's trace identifier (if any) into a future that will
    /// run on another task.
    pub async fn propagate<Fut>(captured: Option<TraceId>, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        match captured {
            Some(trace_id) => Self::scope(trace_id, fut).await,
            None => fut.await,
        }
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn current_reflects_scope() {
        let expected = TraceId::generate();
        let observed = TraceId::scope(expected, async move { TraceId::current() }).await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn current_is_none_out_of_scope() {
        assert!(TraceId::current().is_none());
    }

    #[tokio::test]
    async fn propagate_reinstates_captured_id_on_spawned_task() {
        let expected = TraceId::generate();
        let observed = TraceId::scope(expected, async move {
            let captured = TraceId::current();
            tokio::spawn(TraceId::propagate(captured, async { TraceId::current() }))
                .await
                .expect("spawned task completes")
        })
        .await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn propagate_without_capture_runs_unscoped() {
        let observed = TraceId::propagate(None, async { TraceId::current() }).await;
        assert!(observed.is_none());
    }

    #[test]
    fn from_str_round_trips() {
        let uuid = Uuid::nil();
        let trace_id: TraceId = uuid.to_string().parse().expect("parse uuid");
        assert_eq!(trace_id.to_string(), uuid.to_string());
    }
}
