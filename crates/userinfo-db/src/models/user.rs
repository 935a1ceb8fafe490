//! User database model

use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub email: String,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub total_requests: i64,
    pub used_requests: i64,
    pub is_feishu_user: bool,
}
