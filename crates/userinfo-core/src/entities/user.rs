//! User entity - the profile record of an authenticated caller

use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of a user profile.
///
/// The record is owned by the backing store; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub avatar: String,
    pub description: String,
    pub total_requests: i64,
    pub used_requests: i64,
    pub is_feishu_user: bool,
}

impl User {
    /// Create a new User with an empty quota
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            avatar: String::new(),
            description: String::new(),
            total_requests: 0,
            used_requests: 0,
            is_feishu_user: false,
        }
    }

    /// Requests left in the quota.
    ///
    /// Not clamped: a record whose `used_requests` exceeds `total_requests`
    /// yields a negative value.
    #[inline]
    pub fn remaining_requests(&self) -> i64 {
        self.total_requests - self.used_requests
    }

    /// Set the quota pair
    pub fn with_quota(mut self, total_requests: i64, used_requests: i64) -> Self {
        self.total_requests = total_requests;
        self.used_requests = used_requests;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_empty_quota() {
        let user = User::new("test@example.com");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.remaining_requests(), 0);
        assert!(!user.is_feishu_user);
    }

    #[test]
    fn test_remaining_requests() {
        let user = User::new("a@x.com").with_quota(100, 30);
        assert_eq!(user.remaining_requests(), 70);
    }

    #[test]
    fn test_remaining_requests_exhausted() {
        let user = User::new("a@x.com").with_quota(50, 50);
        assert_eq!(user.remaining_requests(), 0);
    }

    #[test]
    fn test_remaining_requests_not_clamped() {
        // used > total is passed through as-is
        let user = User::new("a@x.com").with_quota(10, 25);
        assert_eq!(user.remaining_requests(), -15);
    }
}
