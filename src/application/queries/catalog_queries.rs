//! Catalog Queries

use crate::domain::EntityId;

/// 获取实体详情查询
#[derive(Debug, Clone, Copy)]
pub struct GetEntity {
    pub id: EntityId,
}

/// 列出某类全部实体查询
#[derive(Debug, Clone, Copy)]
pub struct ListEntities;
