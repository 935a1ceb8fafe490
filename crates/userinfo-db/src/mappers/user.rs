//! User model -> entity mapper

use userinfo_core::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// NULL text columns are read as empty strings.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            email: model.email,
            avatar: model.avatar.unwrap_or_default(),
            description: model.description.unwrap_or_default(),
            total_requests: model.total_requests,
            used_requests: model.used_requests,
            is_feishu_user: model.is_feishu_user,
        }
    }
}
