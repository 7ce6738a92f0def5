//! Datastore to HTTP error conversion.
//!
//! Timeouts and transient connection failures surface as 503 so callers can
//! retry; they never leak internals. Constraint violations become 409, a
//! missing row becomes 404, and everything else collapses into a generic 500.

use vakil_postgres::{DieselError, PgError};

use crate::handler::{Error, ErrorKind};

/// Tracing target for datastore error conversion.
const TRACING_TARGET: &str = "vakil_server::postgres_errors";

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::ServiceUnavailable
                    .with_message("The service is temporarily unavailable")
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::ServiceUnavailable
                    .with_message("The service is temporarily unavailable")
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(DieselError::NotFound) => ErrorKind::NotFound.into_error(),
            PgError::Query(ref query_error) => {
                if let Some(constraint_name) = error.constraint() {
                    tracing::error!(
                        target: TRACING_TARGET,
                        constraint = constraint_name,
                        error = %query_error,
                        "query error (constraint violation)"
                    );
                    return ErrorKind::Conflict.into_error();
                }

                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

// Used only for transactions.
impl From<DieselError> for Error<'static> {
    fn from(error: DieselError) -> Self {
        let pg_error: PgError = error.into();
        pg_error.into()
    }
}
