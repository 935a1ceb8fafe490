//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use std::fmt;
use userinfo_common::AppError;
use userinfo_core::DomainError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Failure reported by the domain or data layer
    Domain(DomainError),

    /// Application error
    App(AppError),

    /// Resource not found (e.g. an unregistered tool)
    NotFound { resource: &'static str, id: String },

    /// Conflict (e.g., duplicate registration)
    Conflict(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the error code for host-facing responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if the backing store caused this error
    pub fn is_infrastructure(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_infrastructure(),
            Self::App(e) => e.is_infrastructure(),
            _ => false,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::Conflict(msg) => AppError::Conflict(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::not_found("Tool", "missing_tool");
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "Tool not found: missing_tool");
    }

    #[test]
    fn test_conflict_error() {
        let err = ServiceError::conflict("tool already registered");
        assert_eq!(err.error_code(), "CONFLICT");
    }

    #[test]
    fn test_domain_error_passthrough() {
        let err = ServiceError::from(DomainError::ConnectionUnavailable("refused".to_string()));
        assert_eq!(err.error_code(), "CONNECTION_UNAVAILABLE");
        assert!(err.is_infrastructure());
        assert_eq!(err.to_string(), "Connection unavailable: refused");
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::not_found("Tool", "x").into();
        assert_eq!(app_err.error_code(), "NOT_FOUND");

        let app_err: AppError =
            ServiceError::from(DomainError::DatabaseError("boom".to_string())).into();
        assert!(app_err.is_infrastructure());
    }
}
