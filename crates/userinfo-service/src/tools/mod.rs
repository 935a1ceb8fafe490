//! Tool surface exposed to the host agent runtime
//!
//! A host discovers tools through a [`ToolRegistry`], then invokes one by
//! name with the caller's identity and a [`ServiceContext`] passed in
//! explicitly.

mod registry;
mod user_info;

use async_trait::async_trait;
use serde::Serialize;

use crate::services::{ServiceContext, ServiceResult};

pub use registry::ToolRegistry;
pub use user_info::GetMyUserInformation;

/// Identity of the authenticated caller, supplied by the host session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub email: String,
}

impl Caller {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Result of a tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutput {
    pub content: String,
    /// When set, the host shows `content` as the final answer instead of
    /// feeding it back into tool selection.
    pub return_direct: bool,
}

impl ToolOutput {
    /// Output to be displayed as the final answer
    pub fn direct(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            return_direct: true,
        }
    }
}

/// Discovery descriptor for a registered tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub return_direct: bool,
}

/// A single operation the host can invoke
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name used for registration and invocation
    fn name(&self) -> &'static str;

    /// Human-readable description shown to the host's planner
    fn description(&self) -> &'static str;

    /// Whether the output is a terminal answer
    fn return_direct(&self) -> bool {
        false
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name(),
            description: self.description(),
            return_direct: self.return_direct(),
        }
    }

    async fn invoke(
        &self,
        ctx: &ServiceContext,
        caller: &Caller,
        input: &str,
    ) -> ServiceResult<ToolOutput>;
}
