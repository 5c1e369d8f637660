//! Favorite Commands

use crate::domain::user::FavoriteKind;
use crate::domain::EntityId;

/// 添加收藏命令
#[derive(Debug, Clone, Copy)]
pub struct AddFavorite {
    pub user_id: EntityId,
    pub kind: FavoriteKind,
    pub target_id: EntityId,
}

/// 移除收藏命令
#[derive(Debug, Clone, Copy)]
pub struct RemoveFavorite {
    pub user_id: EntityId,
    pub kind: FavoriteKind,
    pub target_id: EntityId,
}
