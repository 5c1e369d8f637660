//! PostgreSQL Relation Repository - 多对多连接表

use async_trait::async_trait;

use super::PgDbPool;
use crate::application::ports::{RelationRepositoryPort, RepositoryError};
use crate::domain::{EntityId, Relation};
use crate::infrastructure::persistence::map_sqlx_error;

/// PostgreSQL Relation Repository
pub struct PgRelationRepository {
    pool: PgDbPool,
}

impl PgRelationRepository {
    pub fn new(pool: PgDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RelationRepositoryPort for PgRelationRepository {
    async fn link(
        &self,
        relation: Relation,
        left_id: EntityId,
        right_id: EntityId,
    ) -> Result<bool, RepositoryError> {
        let (_, left) = relation.left();
        let (_, right) = relation.right();
        // 主键冲突时忽略，外键错误仍然返回
        let sql = format!(
            "INSERT INTO {} ({}, {}) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            relation.table(),
            left,
            right
        );

        let result = sqlx::query(&sql)
            .bind(left_id)
            .bind(right_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn unlink(
        &self,
        relation: Relation,
        left_id: EntityId,
        right_id: EntityId,
    ) -> Result<bool, RepositoryError> {
        let (_, left) = relation.left();
        let (_, right) = relation.right();
        let sql = format!(
            "DELETE FROM {} WHERE {} = $1 AND {} = $2",
            relation.table(),
            left,
            right
        );

        let result = sqlx::query(&sql)
            .bind(left_id)
            .bind(right_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn contains(
        &self,
        relation: Relation,
        left_id: EntityId,
        right_id: EntityId,
    ) -> Result<bool, RepositoryError> {
        let (_, left) = relation.left();
        let (_, right) = relation.right();
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1 AND {} = $2)",
            relation.table(),
            left,
            right
        );

        sqlx::query_scalar(&sql)
            .bind(left_id)
            .bind(right_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CatalogRepositoryPort, UserRepositoryPort};
    use crate::domain::catalog::{NewPlanet, Planet};
    use crate::domain::user::NewUser;
    use crate::infrastructure::persistence::postgres::test_support::{pool, unique_email};
    use crate::infrastructure::persistence::postgres::{PgCatalogRepository, PgUserRepository};

    #[tokio::test]
    async fn test_link_is_idempotent() {
        let Some(pool) = pool().await else {
            return;
        };
        let user = PgUserRepository::new(pool.clone())
            .insert(&NewUser::new(unique_email("obi"), "hello"))
            .await
            .unwrap();
        let planet = PgCatalogRepository::<Planet>::new(pool.clone())
            .insert(&NewPlanet {
                name: "Hoth".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let repo = PgRelationRepository::new(pool);
        let relation = Relation::UserFavoritePlanets;

        assert!(repo.link(relation, user.id, planet.id).await.unwrap());
        assert!(!repo.link(relation, user.id, planet.id).await.unwrap());
        assert!(repo.contains(relation, user.id, planet.id).await.unwrap());

        assert!(repo.unlink(relation, user.id, planet.id).await.unwrap());
        assert!(!repo.unlink(relation, user.id, planet.id).await.unwrap());
        assert!(!repo.contains(relation, user.id, planet.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_link_unknown_target_violates_foreign_key() {
        let Some(pool) = pool().await else {
            return;
        };
        let user = PgUserRepository::new(pool.clone())
            .insert(&NewUser::new(unique_email("yoda"), "hmm"))
            .await
            .unwrap();

        let err = PgRelationRepository::new(pool)
            .link(Relation::UserFavoritePeople, user.id, i64::MAX)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }
}
