//! Tool registration table

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::services::{ServiceContext, ServiceError, ServiceResult};

use super::{Caller, GetMyUserInformation, Tool, ToolOutput, ToolSpec};

/// Registered tools, keyed by name
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every tool this crate provides
    ///
    /// # Errors
    /// Returns `ServiceError::Conflict` if two built-in tools share a name
    pub fn with_builtin_tools() -> ServiceResult<Self> {
        let mut registry = Self::new();
        registry.register(GetMyUserInformation)?;
        Ok(registry)
    }

    /// Register a tool
    ///
    /// # Errors
    /// Returns `ServiceError::Conflict` if a tool with the same name exists
    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> ServiceResult<()> {
        let name = tool.name();
        if self.tools.contains_key(name) {
            return Err(ServiceError::conflict(format!(
                "tool already registered: {name}"
            )));
        }

        self.tools.insert(name, Arc::new(tool));
        debug!(tool = name, "Tool registered");
        Ok(())
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Descriptors of all registered tools, ordered by name
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.values().map(|tool| tool.spec()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke a tool by name
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` for unknown names; tool failures
    /// are passed through.
    #[instrument(skip(self, ctx, caller, input))]
    pub async fn invoke(
        &self,
        name: &str,
        ctx: &ServiceContext,
        caller: &Caller,
        input: &str,
    ) -> ServiceResult<ToolOutput> {
        let tool = self
            .get(name)
            .ok_or_else(|| ServiceError::not_found("Tool", name))?;

        tool.invoke(ctx, caller, input).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}
