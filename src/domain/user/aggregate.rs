//! User Context - Aggregate

use crate::domain::EntityId;

/// 用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// 新用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            is_active: true,
        }
    }
}

/// 可收藏的目标类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Planet,
    People,
}

impl FavoriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteKind::Planet => "planet",
            FavoriteKind::People => "people",
        }
    }

    /// 目标资源名
    pub fn resource(&self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Planet",
            FavoriteKind::People => "People",
        }
    }

    /// 添加成功的确认消息
    pub fn added_message(&self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Favorite planet added!",
            FavoriteKind::People => "Favorite person added!",
        }
    }

    /// 移除成功的确认消息
    pub fn removed_message(&self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Favorite planet removed!",
            FavoriteKind::People => "Favorite person removed!",
        }
    }
}

impl std::fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active() {
        let user = NewUser::new("luke@rebellion.org", "x-wing");
        assert!(user.is_active);
        assert_eq!(user.email, "luke@rebellion.org");
    }

    #[test]
    fn test_favorite_messages() {
        assert_eq!(FavoriteKind::Planet.added_message(), "Favorite planet added!");
        assert_eq!(FavoriteKind::People.removed_message(), "Favorite person removed!");
        assert_eq!(FavoriteKind::People.to_string(), "people");
    }
}
