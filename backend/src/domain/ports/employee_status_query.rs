//! Driving port for employee status resolution.
//!
//! Inbound adapters depend on this trait only; they never see repositories
//! or caches. Errors are domain [`Error`] values whose code decides the
//! transport status.

use async_trait::async_trait;

use crate::domain::{Error, StatusSnapshot};

/// Use-case port resolving one national number to one status snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeStatusQuery: Send + Sync {
    /// Resolve the current status for `national_number`.
    async fn resolve_status(&self, national_number: &str) -> Result<StatusSnapshot, Error>;
}
