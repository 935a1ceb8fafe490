//! Service context - dependency container for services
//!
//! Holds the data-layer handle that the host runtime passes into every
//! invocation.

use std::sync::Arc;

use userinfo_core::traits::ConnectionProvider;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; the connection provider is shared.
#[derive(Clone)]
pub struct ServiceContext {
    connections: Arc<dyn ConnectionProvider>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(connections: Arc<dyn ConnectionProvider>) -> Self {
        Self { connections }
    }

    /// Get the connection provider
    pub fn connections(&self) -> &dyn ConnectionProvider {
        self.connections.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("connections", &"dyn ConnectionProvider")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    connections: Option<Arc<dyn ConnectionProvider>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connections(mut self, provider: Arc<dyn ConnectionProvider>) -> Self {
        self.connections = Some(provider);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if the connection provider is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(self.connections.ok_or_else(|| {
            ServiceError::internal("connection provider is required")
        })?))
    }
}
