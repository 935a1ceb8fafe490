//! # userinfo-db
//!
//! Database layer implementing the repository traits of `userinfo-core`.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - A PostgreSQL connection provider that hands out one pooled connection
//!   per invocation
//! - An in-memory provider for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use userinfo_core::ConnectionProvider;
//! use userinfo_db::{create_pool, PgConnectionProvider};
//!
//! async fn example(config: &userinfo_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     let provider = PgConnectionProvider::new(pool);
//!
//!     let mut repo = provider.acquire().await?;
//!     let user = repo.find_by_email("a@x.com").await?;
//!     // connection goes back to the pool when `repo` is dropped
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryConnectionProvider, MemoryFailure};
pub use pool::{create_pool, PgPool};
pub use repositories::{PgConnectionProvider, PgUserRepository};
