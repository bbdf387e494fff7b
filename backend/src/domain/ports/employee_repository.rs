//! Port abstraction for resolving employees by national number.

use async_trait::async_trait;

use crate::domain::{Employee, NationalNumber};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// No employee carries the requested national number.
        NotFound { national_number: String } =>
            "no employee with national number {national_number}",
        /// Repository connection could not be established.
        Connection { message: String } =>
            "employee repository connection failed: {message}",
        /// Query failed during execution or returned malformed data.
        Query { message: String } =>
            "employee repository query failed: {message}",
    }
}

impl EmployeeRepositoryError {
    /// Whether a retry could plausibly succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// Identity lookup consumed by the status resolver.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch the employee owning `national_number`.
    ///
    /// Returns [`EmployeeRepositoryError::NotFound`] when no row matches.
    async fn find_by_national_number(
        &self,
        national_number: &NationalNumber,
    ) -> Result<Employee, EmployeeRepositoryError>;
}
