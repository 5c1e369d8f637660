//! User Queries

use crate::domain::EntityId;

/// 列出所有用户 email
#[derive(Debug, Clone, Copy)]
pub struct ListUserEmails;

/// 获取用户收藏
#[derive(Debug, Clone, Copy)]
pub struct GetUserFavorites {
    pub user_id: EntityId,
}
