//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod cache_key;
mod employee_repository;
mod employee_status_query;
mod salary_repository;
mod status_cache;

pub use cache_key::{STATUS_CACHE_KEY_PREFIX, StatusCacheKey};
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
#[cfg(test)]
pub use employee_status_query::MockEmployeeStatusQuery;
pub use employee_status_query::EmployeeStatusQuery;
#[cfg(test)]
pub use salary_repository::MockSalaryRepository;
pub use salary_repository::{SalaryRepository, SalaryRepositoryError};
#[cfg(test)]
pub use status_cache::MockStatusCache;
pub use status_cache::{StatusCache, StatusCacheError};

#[cfg(test)]
mod tests;
