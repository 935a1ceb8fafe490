//! # userinfo-service
//!
//! Application layer: resolves the calling user, renders the profile report,
//! and exposes both as a tool a host runtime can discover and invoke.

pub mod report;
pub mod services;
pub mod tools;

pub use report::{render, NO_USER_INFORMATION};
pub use services::{ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserInfoService};
pub use tools::{Caller, GetMyUserInformation, Tool, ToolOutput, ToolRegistry, ToolSpec};
