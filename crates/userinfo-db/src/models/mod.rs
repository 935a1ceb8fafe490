//! Database models

mod user;

pub use user::UserModel;
