//! In-memory connection provider
//!
//! Keeps user snapshots in a map and counts outstanding connections so
//! callers can check that every acquired connection was released. Failures
//! of the real store can be injected with [`MemoryFailure`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use userinfo_core::traits::{ConnectionProvider, RepoResult, UserRepository};
use userinfo_core::{DomainError, User};

/// Store failure to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryFailure {
    /// `acquire` fails as if the server were unreachable
    Unavailable,
    /// `acquire` succeeds but every query fails
    Query,
}

#[derive(Default)]
struct Inner {
    users: RwLock<HashMap<String, User>>,
    failure: RwLock<Option<MemoryFailure>>,
    active: AtomicUsize,
    acquired_total: AtomicUsize,
}

/// Connection provider over an in-process user map
#[derive(Clone, Default)]
pub struct MemoryConnectionProvider {
    inner: Arc<Inner>,
}

impl MemoryConnectionProvider {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with users
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let provider = Self::new();
        for user in users {
            provider.insert(user);
        }
        provider
    }

    /// Create a store from a JSON array of user records
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let users: Vec<User> = serde_json::from_str(json)?;
        Ok(Self::with_users(users))
    }

    /// Insert or replace a user, keyed by email
    pub fn insert(&self, user: User) {
        self.inner.users.write().insert(user.email.clone(), user);
    }

    /// Make subsequent operations fail, or clear the failure with `None`
    pub fn set_failure(&self, failure: Option<MemoryFailure>) {
        *self.inner.failure.write() = failure;
    }

    /// Connections currently held by callers
    pub fn active_connections(&self) -> usize {
        self.inner.active.load(Ordering::SeqCst)
    }

    /// Connections handed out since creation
    pub fn acquired_total(&self) -> usize {
        self.inner.acquired_total.load(Ordering::SeqCst)
    }

    fn failure(&self) -> Option<MemoryFailure> {
        *self.inner.failure.read()
    }
}

#[async_trait]
impl ConnectionProvider for MemoryConnectionProvider {
    #[instrument(skip(self))]
    async fn acquire(&self) -> RepoResult<Box<dyn UserRepository>> {
        if self.failure() == Some(MemoryFailure::Unavailable) {
            return Err(DomainError::ConnectionUnavailable(
                "memory store is offline".to_string(),
            ));
        }

        self.inner.active.fetch_add(1, Ordering::SeqCst);
        self.inner.acquired_total.fetch_add(1, Ordering::SeqCst);
        debug!(active = self.active_connections(), "Memory connection acquired");

        Ok(Box::new(MemoryConnection {
            provider: self.clone(),
        }))
    }
}

impl std::fmt::Debug for MemoryConnectionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryConnectionProvider")
            .field("users", &self.inner.users.read().len())
            .field("active", &self.active_connections())
            .finish()
    }
}

/// A counted handle; dropping it releases the connection
struct MemoryConnection {
    provider: MemoryConnectionProvider,
}

#[async_trait]
impl UserRepository for MemoryConnection {
    async fn find_by_email(&mut self, email: &str) -> RepoResult<Option<User>> {
        if self.provider.failure() == Some(MemoryFailure::Query) {
            return Err(DomainError::DatabaseError(
                "memory store query failed".to_string(),
            ));
        }

        Ok(self.provider.inner.users.read().get(email).cloned())
    }
}

impl Drop for MemoryConnection {
    fn drop(&mut self) {
        self.provider.inner.active.fetch_sub(1, Ordering::SeqCst);
    }
}
