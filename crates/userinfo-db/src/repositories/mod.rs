//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in userinfo-core.

mod error;
mod user;

pub use error::map_db_error;
pub use user::{PgConnectionProvider, PgUserRepository};
