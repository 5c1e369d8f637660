//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（目录、用户、关系 Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    AddFavorite,
    CreateEntity,
    RemoveFavorite,
    // Handlers
    handlers::{AddFavoriteHandler, CreateEntityHandler, FavoriteTargets, RemoveFavoriteHandler},
};

pub use error::ApplicationError;

pub use ports::{
    CatalogRepositoryPort, RelationRepositoryPort, RepositoryError, UserRepositoryPort,
};

pub use queries::{
    GetEntity,
    GetUserFavorites,
    ListEntities,
    ListUserEmails,
    // Handlers
    handlers::{
        GetEntityHandler, GetUserFavoritesHandler, ListEntitiesHandler, ListUserEmailsHandler,
        UserFavorites,
    },
};
