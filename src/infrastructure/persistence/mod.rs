//! Persistence Layer - 数据持久化
//!
//! SQLite 与 PostgreSQL 实现，共用同一套表映射

mod connection;
mod tables;

pub mod postgres;
pub mod sqlite;

pub use connection::{Database, DatabaseConfig, DatabaseKind};
pub use tables::{CatalogRow, CatalogTable, SqlValue};

use crate::application::ports::RepositoryError;

/// sqlx 错误 → Repository 错误
///
/// 唯一约束和外键约束归为 Constraint
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err.as_database_error() {
        Some(db) if db.is_unique_violation() || db.is_foreign_key_violation() => {
            RepositoryError::Constraint(db.message().to_string())
        }
        _ => match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound(err.to_string()),
            other => RepositoryError::DatabaseError(other.to_string()),
        },
    }
}

pub(crate) fn decode_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::SerializationError(err.to_string())
}
