//! # userinfo-core
//!
//! Domain layer containing the user entity, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::User;
pub use error::DomainError;
pub use traits::{ConnectionProvider, RepoResult, UserRepository};
