//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Catalog Context: 人物、星球、载具、星舰、物种、电影
//! - User Context: 用户与收藏
//!
//! 以及实体之间的多对多关系定义

pub mod catalog;
pub mod user;

mod relation;

pub use catalog::{CatalogEntity, EntityDraft, EntityId};
pub use relation::Relation;
