//! User information service
//!
//! Resolves the calling user and renders the profile report.

use tracing::{debug, instrument};
use userinfo_core::entities::User;
use userinfo_core::traits::{ConnectionProvider, UserRepository};

use crate::report;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User information service
pub struct UserInfoService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserInfoService<'a> {
    /// Create a new UserInfoService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Look up a user by email.
    ///
    /// One connection is acquired for the lookup and released when this
    /// returns, whether the query succeeded or not. A missing user is
    /// `Ok(None)`; store failures propagate unchanged.
    #[instrument(skip(self))]
    pub async fn find_user(&self, email: &str) -> ServiceResult<Option<User>> {
        let mut repo = self.ctx.connections().acquire().await?;
        let user = repo.find_by_email(email).await?;

        debug!(found = user.is_some(), "User lookup finished");
        Ok(user)
    }

    /// Look up a user and render the profile report
    #[instrument(skip(self))]
    pub async fn report(&self, email: &str) -> ServiceResult<String> {
        let user = self.find_user(email).await?;
        Ok(report::render(user.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use userinfo_core::DomainError;
    use userinfo_db::{MemoryConnectionProvider, MemoryFailure};

    use super::*;
    use crate::services::ServiceError;

    fn vip() -> User {
        User {
            email: "a@x.com".to_string(),
            avatar: "http://img/1.png".to_string(),
            description: "VIP".to_string(),
            total_requests: 100,
            used_requests: 30,
            is_feishu_user: true,
        }
    }

    fn context(provider: &MemoryConnectionProvider) -> ServiceContext {
        ServiceContext::new(Arc::new(provider.clone()))
    }

    #[tokio::test]
    async fn test_find_user() {
        let provider = MemoryConnectionProvider::with_users([vip()]);
        let ctx = context(&provider);

        let user = UserInfoService::new(&ctx).find_user("a@x.com").await.unwrap();
        assert_eq!(user, Some(vip()));
        assert_eq!(provider.active_connections(), 0);
    }

    #[tokio::test]
    async fn test_find_user_missing_is_not_an_error() {
        let provider = MemoryConnectionProvider::with_users([vip()]);
        let ctx = context(&provider);

        let user = UserInfoService::new(&ctx).find_user("ghost@x.com").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_malformed_identity_is_forwarded() {
        let provider = MemoryConnectionProvider::with_users([vip()]);
        let ctx = context(&provider);

        let user = UserInfoService::new(&ctx).find_user("not an email").await.unwrap();
        assert!(user.is_none());
        assert_eq!(provider.acquired_total(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_store_propagates() {
        let provider = MemoryConnectionProvider::new();
        provider.set_failure(Some(MemoryFailure::Unavailable));
        let ctx = context(&provider);

        let err = UserInfoService::new(&ctx).find_user("a@x.com").await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::ConnectionUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_query_failure_releases_connection() {
        let provider = MemoryConnectionProvider::with_users([vip()]);
        provider.set_failure(Some(MemoryFailure::Query));
        let ctx = context(&provider);

        let err = UserInfoService::new(&ctx).find_user("a@x.com").await.unwrap_err();
        assert!(err.is_infrastructure());
        assert_eq!(provider.acquired_total(), 1);
        assert_eq!(provider.active_connections(), 0);
    }

    #[tokio::test]
    async fn test_report() {
        let provider = MemoryConnectionProvider::with_users([vip()]);
        let ctx = context(&provider);
        let service = UserInfoService::new(&ctx);

        let found = service.report("a@x.com").await.unwrap();
        assert!(found.contains("剩余使用次数: 70"));

        let missing = service.report("ghost@x.com").await.unwrap();
        assert_eq!(missing, report::NO_USER_INFORMATION);
    }
}
