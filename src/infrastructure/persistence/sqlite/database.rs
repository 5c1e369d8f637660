//! SQLite Database - 数据库连接和迁移

use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

use super::super::connection::unsupported_scheme;
use super::super::{DatabaseConfig, DatabaseKind};
use crate::domain::Relation;

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    if config.kind() != Some(DatabaseKind::Sqlite) {
        return Err(unsupported_scheme(&config.database_url));
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // 启用 WAL 模式，允许并发读写
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await?;

    // 遇到锁时等待而不是立即失败
    sqlx::query("PRAGMA busy_timeout=5000")
        .execute(&pool)
        .await?;

    tracing::info!("SQLite pool created with WAL mode and busy_timeout=5000ms");

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "user" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email VARCHAR(120) NOT NULL UNIQUE,
            password VARCHAR(80) NOT NULL,
            is_active BOOLEAN NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(250) NOT NULL,
            birth_year VARCHAR(50),
            eye_color VARCHAR(50),
            gender VARCHAR(50),
            hair_color VARCHAR(50),
            height VARCHAR(50),
            mass VARCHAR(50),
            skin_color VARCHAR(50),
            homeworld VARCHAR(250),
            created DATETIME,
            edited DATETIME,
            image VARCHAR(250)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS film (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR(250) NOT NULL,
            episode_id INTEGER NOT NULL,
            opening_crawl TEXT,
            director VARCHAR(250),
            producer VARCHAR(250),
            release_date DATETIME,
            created DATETIME,
            edited DATETIME
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS starship (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(250) NOT NULL,
            model VARCHAR(250),
            starship_class VARCHAR(250),
            manufacturer VARCHAR(250),
            cost_in_credits VARCHAR(50),
            length VARCHAR(50),
            crew VARCHAR(50),
            passengers VARCHAR(50),
            max_atmosphering_speed VARCHAR(50),
            hyperdrive_rating VARCHAR(50),
            mglt VARCHAR(50),
            cargo_capacity VARCHAR(50),
            consumables VARCHAR(50),
            created DATETIME,
            edited DATETIME
        )
        "#,
    )
    .execute(pool)
    .await?;

    // name 可为空：载具创建不做必填校验
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vehicle (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(250),
            model VARCHAR(250),
            vehicle_class VARCHAR(250),
            manufacturer VARCHAR(250),
            length VARCHAR(50),
            cost_in_credits VARCHAR(50),
            crew VARCHAR(50),
            passengers VARCHAR(50),
            max_atmosphering_speed VARCHAR(50),
            cargo_capacity VARCHAR(50),
            consumables VARCHAR(50),
            created DATETIME,
            edited DATETIME,
            image VARCHAR(250)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS species (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(250) NOT NULL,
            classification VARCHAR(250),
            designation VARCHAR(250),
            average_height VARCHAR(50),
            average_lifespan VARCHAR(50),
            eye_colors VARCHAR(250),
            hair_colors VARCHAR(250),
            skin_colors VARCHAR(250),
            language VARCHAR(250),
            homeworld VARCHAR(250),
            created DATETIME,
            edited DATETIME
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS planet (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(250) NOT NULL,
            diameter VARCHAR(50),
            rotation_period VARCHAR(50),
            orbital_period VARCHAR(50),
            gravity VARCHAR(50),
            population VARCHAR(50),
            climate VARCHAR(250),
            terrain VARCHAR(250),
            surface_water VARCHAR(50),
            created DATETIME,
            edited DATETIME,
            image VARCHAR(250)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 连接表：复合主键保证 (left, right) 唯一
    for relation in Relation::ALL {
        let (left_table, left_column) = relation.left();
        let (right_table, right_column) = relation.right();
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                {left_column} INTEGER NOT NULL REFERENCES "{left_table}"(id),
                {right_column} INTEGER NOT NULL REFERENCES "{right_table}"(id),
                PRIMARY KEY ({left_column}, {right_column})
            )
            "#,
            table = relation.table(),
        );
        sqlx::query(&ddl).execute(pool).await?;
    }

    tracing::info!("Database migrations completed");
    Ok(())
}
