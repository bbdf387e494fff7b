//! Port abstraction for reading an employee's salary history.

use async_trait::async_trait;

use crate::domain::{EmployeeId, SalaryRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by salary repository adapters.
    pub enum SalaryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "salary repository connection failed: {message}",
        /// Query failed during execution or returned malformed data.
        Query { message: String } =>
            "salary repository query failed: {message}",
    }
}

impl SalaryRepositoryError {
    /// Whether a retry could plausibly succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// Compensation lookup consumed by the status resolver.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalaryRepository: Send + Sync {
    /// Load every salary record for the employee, ordered by year then month.
    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<SalaryRecord>, SalaryRepositoryError>;

    /// Count the employee's salary records.
    async fn count_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<u64, SalaryRepositoryError>;
}
