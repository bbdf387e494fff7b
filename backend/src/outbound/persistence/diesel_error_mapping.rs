//! Shared Diesel error mapping for the read-only repositories.
//!
//! Connection-class failures map to the port's `Connection` variant so the
//! retry wrapper can tell them apart from query failures.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure into a repository-specific connection error.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(error.into_message())
}

/// Map Diesel errors into query or connection constructors.
pub(crate) fn map_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DeserializationError(_) => query("unreadable row"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection closed")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UnableToSendCommand, _) => {
            connection("database unreachable")
        }
        _ => query("database error"),
    }
}
