//! 数据库连接 - 按 URL 方案选择 SQLite 或 PostgreSQL

use super::{postgres, sqlite};

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库 URL（`sqlite:` 或 `postgresql:`）
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:///tmp/test.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn kind(&self) -> Option<DatabaseKind> {
        DatabaseKind::from_url(&self.database_url)
    }
}

/// 支持的数据库
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    Sqlite,
    Postgres,
}

impl DatabaseKind {
    /// 由 URL 方案判断；`postgres:` 与 `postgresql:` 等价
    pub fn from_url(url: &str) -> Option<Self> {
        let (scheme, _) = url.split_once(':')?;
        match scheme {
            "sqlite" => Some(DatabaseKind::Sqlite),
            "postgres" | "postgresql" => Some(DatabaseKind::Postgres),
            _ => None,
        }
    }
}

/// 已连接的数据库
#[derive(Debug, Clone)]
pub enum Database {
    Sqlite(sqlite::DbPool),
    Postgres(postgres::PgDbPool),
}

impl Database {
    /// 根据 URL 方案创建连接池
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        match config.kind() {
            Some(DatabaseKind::Sqlite) => Ok(Database::Sqlite(sqlite::create_pool(config).await?)),
            Some(DatabaseKind::Postgres) => {
                Ok(Database::Postgres(postgres::create_pool(config).await?))
            }
            None => Err(unsupported_scheme(&config.database_url)),
        }
    }

    /// 运行数据库迁移
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        match self {
            Database::Sqlite(pool) => sqlite::run_migrations(pool).await,
            Database::Postgres(pool) => postgres::run_migrations(pool).await,
        }
    }

    pub fn kind(&self) -> DatabaseKind {
        match self {
            Database::Sqlite(_) => DatabaseKind::Sqlite,
            Database::Postgres(_) => DatabaseKind::Postgres,
        }
    }
}

pub(crate) fn unsupported_scheme(url: &str) -> sqlx::Error {
    let scheme = url.split_once(':').map(|(scheme, _)| scheme).unwrap_or(url);
    sqlx::Error::Configuration(
        format!(
            "unsupported database scheme '{}', expected sqlite: or postgresql:",
            scheme
        )
        .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_url() {
        assert_eq!(
            DatabaseKind::from_url("sqlite:///tmp/test.db?mode=rwc"),
            Some(DatabaseKind::Sqlite)
        );
        assert_eq!(DatabaseKind::from_url("sqlite::memory:"), Some(DatabaseKind::Sqlite));
        assert_eq!(
            DatabaseKind::from_url("postgresql://u:p@localhost/db"),
            Some(DatabaseKind::Postgres)
        );
        assert_eq!(
            DatabaseKind::from_url("postgres://u:p@localhost/db"),
            Some(DatabaseKind::Postgres)
        );
        assert_eq!(DatabaseKind::from_url("mysql://localhost/db"), None);
        assert_eq!(DatabaseKind::from_url("holocron.db"), None);
    }

    #[test]
    fn test_normalized_url_selects_postgres() {
        let url = crate::config::normalize_database_url("postgres://u:p@db.internal:5432/holocron");
        let config = DatabaseConfig {
            database_url: url,
            max_connections: 5,
        };
        assert_eq!(config.kind(), Some(DatabaseKind::Postgres));
    }

    #[tokio::test]
    async fn test_connect_and_migrate_sqlite() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        assert_eq!(db.kind(), DatabaseKind::Sqlite);
        db.migrate().await.unwrap();
        db.migrate().await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_rejects_unknown_scheme() {
        let config = DatabaseConfig {
            database_url: "mysql://localhost/holocron".to_string(),
            max_connections: 1,
        };
        let err = Database::connect(&config).await.unwrap_err();
        assert!(err.to_string().contains("mysql"));
    }
}
