//! Profile report rendering
//!
//! Turns a looked-up user (or its absence) into the text shown to the
//! caller. The output is meant for direct display; nothing downstream parses
//! it. Avatar and description are embedded verbatim without escaping.

use userinfo_core::entities::User;

/// Returned when the caller has no user record
pub const NO_USER_INFORMATION: &str = "No user information";

/// Title of the avatar image; markdown renderers read it as a 60x40 size hint
const AVATAR_SIZE_HINT: &str = "=60x40";

/// Render the profile report for `user`.
///
/// Line order is fixed: heading, avatar image, email, description,
/// remaining requests, Feishu membership.
pub fn render(user: Option<&User>) -> String {
    let Some(user) = user else {
        return NO_USER_INFORMATION.to_string();
    };

    format!(
        "您的登录用户信息如下：\n\n\
         头像：![头像]({avatar} \"{AVATAR_SIZE_HINT}\")\n\n\
         邮箱: {email}\n\n\
         描述: {description}\n\n\
         剩余使用次数: {remaining}\n\n\
         是否飞书用户：{feishu}\n",
        avatar = user.avatar,
        email = user.email,
        description = user.description,
        remaining = user.remaining_requests(),
        feishu = flag(user.is_feishu_user),
    )
}

/// Boolean literal as it appears in the report
fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
