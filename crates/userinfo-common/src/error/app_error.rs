//! Application error types
//!
//! Unified error handling for everything above the domain layer.

use userinfo_core::DomainError;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get error code for host-facing responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if the failure originates in the backing store
    #[must_use]
    pub fn is_infrastructure(&self) -> bool {
        match self {
            Self::Database(_) => true,
            Self::Domain(e) => e.is_infrastructure(),
            _ => false,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Failure summary reported by the host runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl ErrorResponse {
    /// Summarize an error raised at the binary edge.
    ///
    /// The code comes from the first `AppError` in the chain; anything else
    /// is reported as `INTERNAL_ERROR`. The message keeps the whole context
    /// chain.
    #[must_use]
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let code = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<AppError>())
            .map_or("INTERNAL_ERROR", AppError::error_code);

        Self {
            code,
            message: format!("{err:#}"),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
