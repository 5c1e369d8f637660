//! SQLite Relation Repository - 多对多连接表

use async_trait::async_trait;

use super::DbPool;
use crate::application::ports::{RelationRepositoryPort, RepositoryError};
use crate::domain::{EntityId, Relation};
use crate::infrastructure::persistence::map_sqlx_error;

/// SQLite Relation Repository
pub struct SqliteRelationRepository {
    pool: DbPool,
}

impl SqliteRelationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RelationRepositoryPort for SqliteRelationRepository {
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
            "INSERT OR IGNORE INTO {} ({}, {}) VALUES (?, ?)",
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
            "DELETE FROM {} WHERE {} = ? AND {} = ?",
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
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ? AND {} = ?)",
            relation.table(),
            left,
            right
        );

        let exists: i64 = sqlx::query_scalar(&sql)
            .bind(left_id)
            .bind(right_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(exists != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CatalogRepositoryPort, UserRepositoryPort};
    use crate::domain::catalog::{Film, NewFilm, NewPeople, NewPlanet, People, Planet};
    use crate::domain::user::NewUser;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteCatalogRepository,
        SqliteUserRepository,
    };

    async fn pool() -> DbPool {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_link_is_idempotent() {
        let pool = pool().await;
        let user = SqliteUserRepository::new(pool.clone())
            .insert(&NewUser::new("obi@wan.org", "hello"))
            .await
            .unwrap();
        let planet = SqliteCatalogRepository::<Planet>::new(pool.clone())
            .insert(&NewPlanet {
                name: "Hoth".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let repo = SqliteRelationRepository::new(pool);
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
        let pool = pool().await;
        let user = SqliteUserRepository::new(pool.clone())
            .insert(&NewUser::new("yoda@dagobah.sys", "hmm"))
            .await
            .unwrap();
        let repo = SqliteRelationRepository::new(pool);

        let err = repo
            .link(Relation::UserFavoritePeople, user.id, 42)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_catalog_relations() {
        let pool = pool().await;
        let luke = SqliteCatalogRepository::<People>::new(pool.clone())
            .insert(&NewPeople {
                name: "Luke".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let films = SqliteCatalogRepository::<Film>::new(pool.clone());
        let hope = films
            .insert(&NewFilm {
                title: "A New Hope".to_string(),
                episode_id: 4,
                ..Default::default()
            })
            .await
            .unwrap();
        let empire = films
            .insert(&NewFilm {
                title: "The Empire Strikes Back".to_string(),
                episode_id: 5,
                ..Default::default()
            })
            .await
            .unwrap();
        let repo = SqliteRelationRepository::new(pool);

        repo.link(Relation::PeopleFilms, luke.id, empire.id).await.unwrap();
        repo.link(Relation::PeopleFilms, luke.id, hope.id).await.unwrap();

        assert!(repo.contains(Relation::PeopleFilms, luke.id, hope.id).await.unwrap());
        assert_eq!(
            films.find_related(Relation::PeopleFilms, luke.id).await.unwrap(),
            vec![hope, empire]
        );
    }
}
