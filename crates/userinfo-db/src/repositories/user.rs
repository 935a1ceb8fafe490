//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tracing::instrument;

use userinfo_core::entities::User;
use userinfo_core::traits::{ConnectionProvider, RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::map_db_error;

/// User queries over one pooled PostgreSQL connection.
///
/// The connection returns to the pool when this value is dropped.
pub struct PgUserRepository {
    conn: PoolConnection<Postgres>,
}

impl PgUserRepository {
    /// Wrap an acquired connection
    pub fn new(conn: PoolConnection<Postgres>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&mut self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT email, avatar, description, total_requests, used_requests, is_feishu_user
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}

/// Connection provider backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgConnectionProvider {
    pool: PgPool,
}

impl PgConnectionProvider {
    /// Create a new PgConnectionProvider
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionProvider for PgConnectionProvider {
    #[instrument(skip(self))]
    async fn acquire(&self) -> RepoResult<Box<dyn UserRepository>> {
        let conn = self.pool.acquire().await.map_err(map_db_error)?;
        Ok(Box::new(PgUserRepository::new(conn)))
    }
}

impl std::fmt::Debug for PgConnectionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgConnectionProvider")
            .field("pool", &"PgPool")
            .finish()
    }
}
