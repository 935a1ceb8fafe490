//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use userinfo_core::DomainError;

/// Convert SQLx error to DomainError
///
/// Pool and transport failures mean the store could not be reached at all;
/// everything else is reported as a query failure.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) | SqlxError::Tls(_) => {
            DomainError::ConnectionUnavailable(e.to_string())
        }
        _ => DomainError::DatabaseError(e.to_string()),
    }
}
