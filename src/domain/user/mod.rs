//! User Context - 用户与收藏
//!
//! 收藏是用户与星球/人物之间的集合关系：同一对 (user, target) 至多一条

mod aggregate;

pub use aggregate::{FavoriteKind, NewUser, User};

/// 未指定 `user_id` 时使用的用户
pub const DEFAULT_USER_ID: crate::domain::EntityId = 1;
