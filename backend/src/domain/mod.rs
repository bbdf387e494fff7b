//! Domain primitives, the status calculator and the resolution service.
//!
//! Purpose: define strongly typed entities shared by the inbound and
//! outbound adapters and the pipeline that turns a national number into a
//! status snapshot. Adapters depend on [`ports`]; nothing in this module
//! depends on an adapter.
//!
//! Public surface:
//! - [`Employee`], [`NationalNumber`], [`SalaryRecord`], [`Month`]: read
//!   models produced by repositories.
//! - [`StatusSnapshot`], [`SalarySummary`], [`SalaryStatus`]: the computed
//!   result, serialised on the wire and in caches.
//! - [`SalaryCalculator`]: pure calculation.
//! - [`EmployeeStatusService`]: cache-aside resolver implementing
//!   [`ports::EmployeeStatusQuery`].
//! - [`Error`] / [`ErrorCode`]: use-case failures.

pub mod employee;
pub mod employee_status_service;
pub mod error;
pub mod ports;
pub mod salary;
pub mod salary_calculator;
pub mod status;
pub mod trace_id;

pub use self::employee::{Employee, EmployeeId, NationalNumber};
pub use self::employee_status_service::{
    EmployeeStatusService, MIN_SALARY_RECORDS, ResolutionStage,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::salary::{Month, MonthValidationError, SalaryRecord};
pub use self::salary_calculator::{
    SalaryCalculation, SalaryCalculator, seasonally_adjusted, status_for_average,
};
pub use self::status::{SalaryStatus, SalarySummary, StatusSnapshot};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use getemps::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Invalid National Number"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
