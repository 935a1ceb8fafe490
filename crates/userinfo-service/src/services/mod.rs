//! Business logic services
//!
//! Service layer implementations that orchestrate domain operations.

pub mod context;
pub mod error;
pub mod user_info;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use user_info::UserInfoService;
