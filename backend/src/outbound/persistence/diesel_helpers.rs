//! Error mapping and row collection shared by the Diesel adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::ServiceRowSourceError;

use super::pool::PoolError;

/// Extract a readable message from a pool error.
#[must_use]
pub fn map_pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Map pool errors to connection failures.
#[must_use]
pub fn map_pool_error(error: PoolError) -> ServiceRowSourceError {
    ServiceRowSourceError::connection(map_pool_error_message(error))
}

/// Map a Diesel error raised while reading `relation`.
///
/// A closed connection is reported as a connection failure; anything else
/// is a query failure.
#[must_use]
pub fn map_diesel_error(error: &DieselError, relation: &str) -> ServiceRowSourceError {
    let message = error.to_string();
    debug!(%message, relation, "diesel operation failed");
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            ServiceRowSourceError::connection(format!("{relation}: {message}"))
        }
        _ => ServiceRowSourceError::query(format!("{relation}: {message}")),
    }
}

/// Convert rows, failing on the first conversion error.
pub fn collect_rows<D, T>(
    rows: Vec<D>,
    relation: &str,
) -> Result<Vec<T>, ServiceRowSourceError>
where
    T: TryFrom<D, Error = String>,
{
    rows.into_iter()
        .map(T::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|message| ServiceRowSourceError::query(format!("{relation}: {message}")))
}
