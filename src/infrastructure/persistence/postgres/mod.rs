//! PostgreSQL Persistence - 生产部署使用的 PostgreSQL 实现
//!
//! 与 SQLite 实现共用表映射，只在 SQL 方言上不同：
//! `$n` 占位符、`RETURNING id`、`ON CONFLICT DO NOTHING`

mod catalog_repo;
mod database;
mod relation_repo;
mod user_repo;

pub use catalog_repo::*;
pub use database::*;
pub use relation_repo::*;
pub use user_repo::*;

/// `$start, $start+1, ...` 共 `count` 个占位符
pub(crate) fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|n| format!("${}", n))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{create_pool, run_migrations, PgDbPool};
    use crate::infrastructure::persistence::DatabaseConfig;

    /// 测试用 PostgreSQL 连接
    ///
    /// 只有设置了 `TEST_DATABASE_URL` 时才返回连接，否则跳过
    pub async fn pool() -> Option<PgDbPool> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let config = DatabaseConfig {
            database_url: url,
            max_connections: 2,
        };
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Some(pool)
    }

    /// 唯一邮箱，避免多次运行之间冲突
    pub fn unique_email(prefix: &str) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        format!("{}-{}@holocron.test", prefix, nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(1, 3), "$1, $2, $3");
        assert_eq!(placeholders(2, 1), "$2");
        assert_eq!(placeholders(1, 0), "");
    }
}
