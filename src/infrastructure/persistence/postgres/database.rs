//! PostgreSQL Database - 数据库连接和迁移

use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use super::super::connection::unsupported_scheme;
use super::super::{DatabaseConfig, DatabaseKind};
use crate::domain::Relation;

/// PostgreSQL 连接池
pub type PgDbPool = Pool<Postgres>;

/// 创建数据库连接池
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgDbPool, sqlx::Error> {
    if config.kind() != Some(DatabaseKind::Postgres) {
        return Err(unsupported_scheme(&config.database_url));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "PostgreSQL pool created"
    );

    Ok(pool)
}

const ENTITY_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS "user" (
        id BIGSERIAL PRIMARY KEY,
        email VARCHAR(120) NOT NULL UNIQUE,
        password VARCHAR(80) NOT NULL,
        is_active BOOLEAN NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS people (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(250) NOT NULL,
        birth_year VARCHAR(50),
        eye_color VARCHAR(50),
        gender VARCHAR(50),
        hair_color VARCHAR(50),
        height VARCHAR(50),
        mass VARCHAR(50),
        skin_color VARCHAR(50),
        homeworld VARCHAR(250),
        created TIMESTAMP,
        edited TIMESTAMP,
        image VARCHAR(250)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS film (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(250) NOT NULL,
        episode_id BIGINT NOT NULL,
        opening_crawl TEXT,
        director VARCHAR(250),
        producer VARCHAR(250),
        release_date TIMESTAMP,
        created TIMESTAMP,
        edited TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS starship (
        id BIGSERIAL PRIMARY KEY,
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
        created TIMESTAMP,
        edited TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicle (
        id BIGSERIAL PRIMARY KEY,
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
        created TIMESTAMP,
        edited TIMESTAMP,
        image VARCHAR(250)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS species (
        id BIGSERIAL PRIMARY KEY,
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
        created TIMESTAMP,
        edited TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS planet (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(250) NOT NULL,
        diameter VARCHAR(50),
        rotation_period VARCHAR(50),
        orbital_period VARCHAR(50),
        gravity VARCHAR(50),
        population VARCHAR(50),
        climate VARCHAR(250),
        terrain VARCHAR(250),
        surface_water VARCHAR(50),
        created TIMESTAMP,
        edited TIMESTAMP,
        image VARCHAR(250)
    )
    "#,
];

/// 连接表 DDL
fn join_table_ddl(relation: Relation) -> String {
    let (left_table, left_column) = relation.left();
    let (right_table, right_column) = relation.right();
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            {left_column} BIGINT NOT NULL REFERENCES "{left_table}"(id),
            {right_column} BIGINT NOT NULL REFERENCES "{right_table}"(id),
            PRIMARY KEY ({left_column}, {right_column})
        )
        "#,
        table = relation.table(),
    )
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &PgDbPool) -> Result<(), sqlx::Error> {
    for ddl in ENTITY_TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }

    for relation in Relation::ALL {
        sqlx::query(&join_table_ddl(relation)).execute(pool).await?;
    }

    tracing::info!("Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_table_references_quoted_user() {
        let ddl = join_table_ddl(Relation::UserFavoritePlanets);
        assert!(ddl.contains("user_favorites_planets"));
        assert!(ddl.contains(r#"user_id BIGINT NOT NULL REFERENCES "user"(id)"#));
        assert!(ddl.contains(r#"planet_id BIGINT NOT NULL REFERENCES "planet"(id)"#));
        assert!(ddl.contains("PRIMARY KEY (user_id, planet_id)"));
    }

    #[tokio::test]
    async fn test_pg_pool_rejects_sqlite_url() {
        let err = create_pool(&DatabaseConfig::in_memory()).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Configuration(_)));
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let Some(pool) = super::super::test_support::pool().await else {
            return;
        };
        run_migrations(&pool).await.unwrap();
    }
}
