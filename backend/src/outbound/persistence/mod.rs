//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are read-only translators between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Every query runs through [`retry_transient`],
//! which retries connection-class failures only.
//!
//! # Example
//!
//! ```no_run
//! use getemps::outbound::persistence::{
//!     DbPool, DieselEmployeeRepository, DieselSalaryRepository, PoolConfig,
//! };
//!
//! # async fn wire() -> Result<(), getemps::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/getemps")).await?;
//! let employees = DieselEmployeeRepository::new(pool.clone());
//! let salaries = DieselSalaryRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_employee_repository;
mod diesel_error_mapping;
mod diesel_salary_repository;
mod models;
mod pool;
mod retry;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use diesel_salary_repository::DieselSalaryRepository;
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
pub use retry::{RetryPolicy, Transient, retry_transient};
