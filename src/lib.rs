//! Holocron - 星球大战资料库 REST API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Catalog Context: 人物、星球、载具、星舰、物种、电影
//! - User Context: 用户与收藏
//! - Relation: 实体间的多对多关联
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Catalog / User / Relation Repositories）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
