//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::User;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// User queries bound to a single acquired connection.
///
/// Implementations own their connection and give it back when dropped.
#[async_trait]
pub trait UserRepository: Send {
    /// Find user by email
    ///
    /// Returns `Ok(None)` when no record matches. The email is forwarded
    /// to the store without validation.
    async fn find_by_email(&mut self, email: &str) -> RepoResult<Option<User>>;
}

// ============================================================================
// Connection Provider
// ============================================================================

/// Hands out one scoped connection per invocation.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Acquire a connection wrapped as a user repository
    ///
    /// Fails with `DomainError::ConnectionUnavailable` when the store cannot
    /// be reached.
    async fn acquire(&self) -> RepoResult<Box<dyn UserRepository>>;
}
