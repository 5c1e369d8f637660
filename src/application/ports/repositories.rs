//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::{NewUser, User};
use crate::domain::{CatalogEntity, EntityId, Relation};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Catalog Repository
// ============================================================================

/// 目录实体 Repository Port
///
/// 每种实体一个实现；实体只增不改
#[async_trait]
pub trait CatalogRepositoryPort<E: CatalogEntity>: Send + Sync {
    /// 获取全部实体（按 id 升序）
    async fn find_all(&self) -> Result<Vec<E>, RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: EntityId) -> Result<Option<E>, RepositoryError>;

    /// 插入并返回持久化后的实体（含新分配的 id）
    async fn insert(&self, draft: &E::Draft) -> Result<E, RepositoryError>;

    /// 通过关系查找右侧实体，例如某用户收藏的全部星球
    async fn find_related(
        &self,
        relation: Relation,
        left_id: EntityId,
    ) -> Result<Vec<E>, RepositoryError>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, RepositoryError>;

    /// 插入用户，email 重复返回 Constraint
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;
}

// ============================================================================
// Relation Repository
// ============================================================================

/// 多对多连接表 Port
///
/// 关系是集合：link/unlink 都是幂等的
#[async_trait]
pub trait RelationRepositoryPort: Send + Sync {
    /// 建立关系，返回是否新增了一行
    async fn link(
        &self,
        relation: Relation,
        left_id: EntityId,
        right_id: EntityId,
    ) -> Result<bool, RepositoryError>;

    /// 解除关系，返回是否删除了一行
    async fn unlink(
        &self,
        relation: Relation,
        left_id: EntityId,
        right_id: EntityId,
    ) -> Result<bool, RepositoryError>;

    /// 关系是否存在
    async fn contains(
        &self,
        relation: Relation,
        left_id: EntityId,
        right_id: EntityId,
    ) -> Result<bool, RepositoryError>;
}
