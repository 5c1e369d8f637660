//! SQLite Persistence - SQLite 数据库持久化实现

mod catalog_repo;
mod database;
mod relation_repo;
mod user_repo;

pub use catalog_repo::*;
pub use database::*;
pub use relation_repo::*;
pub use user_repo::*;

pub use super::DatabaseConfig;
