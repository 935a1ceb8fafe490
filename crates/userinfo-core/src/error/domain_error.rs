//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// A missing user is not an error; lookups return `Ok(None)` for that case.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Connection unavailable: {0}")]
    ConnectionUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for host-facing responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::ConnectionUnavailable(_) => "CONNECTION_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this error comes from the backing store
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::DatabaseError(_) | Self::ConnectionUnavailable(_)
        )
    }
}
