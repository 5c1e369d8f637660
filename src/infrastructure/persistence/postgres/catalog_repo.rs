//! PostgreSQL Catalog Repository

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{Postgres, Row};
use std::marker::PhantomData;

use super::{placeholders, PgDbPool};
use crate::application::ports::{CatalogRepositoryPort, RepositoryError};
use crate::domain::{EntityId, Relation};
use crate::infrastructure::persistence::{decode_error, map_sqlx_error, CatalogTable, SqlValue};

type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

fn bind_value(query: PgQuery<'_>, value: SqlValue) -> PgQuery<'_> {
    match value {
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Integer(v) => query.bind(v),
        SqlValue::Timestamp(v) => query.bind(v),
    }
}

/// `INSERT ... RETURNING id`
fn insert_sql<E: CatalogTable>() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders(1, E::COLUMNS.len())
    )
}

/// PostgreSQL 目录实体 Repository
pub struct PgCatalogRepository<E> {
    pool: PgDbPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: CatalogTable> PgCatalogRepository<E> {
    pub fn new(pool: PgDbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn decode_rows(rows: Vec<PgRow>) -> Result<Vec<E>, RepositoryError> {
        rows.iter()
            .map(|row| E::decode(row).map_err(decode_error))
            .collect()
    }
}

#[async_trait]
impl<E: CatalogTable> CatalogRepositoryPort<E> for PgCatalogRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} t ORDER BY t.id",
            E::select_columns("t"),
            E::TABLE
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Self::decode_rows(rows)
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<E>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} t WHERE t.id = $1",
            E::select_columns("t"),
            E::TABLE
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref()
            .map(|row| E::decode(row))
            .transpose()
            .map_err(decode_error)
    }

    async fn insert(&self, draft: &E::Draft) -> Result<E, RepositoryError> {
        let sql = insert_sql::<E>();

        let mut query = sqlx::query(&sql);
        for value in E::values(draft) {
            query = bind_value(query, value);
        }

        let row = query
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        let id: EntityId = row.try_get("id").map_err(decode_error)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("{} {}", E::RESOURCE, id)))
    }

    async fn find_related(
        &self,
        relation: Relation,
        left_id: EntityId,
    ) -> Result<Vec<E>, RepositoryError> {
        let (right_table, right_column) = relation.right();
        if right_table != E::TABLE {
            return Err(RepositoryError::Constraint(format!(
                "relation {} does not target {}",
                relation,
                E::TABLE
            )));
        }
        let (_, left_column) = relation.left();

        let sql = format!(
            "SELECT {columns} FROM {table} t JOIN {join} j ON j.{right_column} = t.id \
             WHERE j.{left_column} = $1 ORDER BY t.id",
            columns = E::select_columns("t"),
            table = E::TABLE,
            join = relation.table(),
        );
        let rows = sqlx::query(&sql)
            .bind(left_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Self::decode_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{RelationRepositoryPort, UserRepositoryPort};
    use crate::domain::catalog::{parse_http_date, NewFilm, NewVehicle, Film, People, Vehicle};
    use crate::domain::catalog::NewPeople;
    use crate::domain::user::NewUser;
    use crate::infrastructure::persistence::postgres::test_support::{pool, unique_email};
    use crate::infrastructure::persistence::postgres::{PgRelationRepository, PgUserRepository};

    #[test]
    fn test_insert_sql_numbers_every_column() {
        assert_eq!(
            insert_sql::<Film>(),
            "INSERT INTO film (title, episode_id, opening_crawl, director, producer, \
             release_date, created, edited) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id"
        );
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let Some(pool) = pool().await else {
            return;
        };
        let repo = PgCatalogRepository::<Film>::new(pool);
        let film = repo
            .insert(&NewFilm {
                title: "Return of the Jedi".to_string(),
                episode_id: 6,
                release_date: parse_http_date("Wed, 25 May 1983 00:00:00 GMT"),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(film.episode_id, 6);
        assert_eq!(repo.find_by_id(film.id).await.unwrap(), Some(film));
    }

    #[tokio::test]
    async fn test_vehicle_without_name() {
        let Some(pool) = pool().await else {
            return;
        };
        let repo = PgCatalogRepository::<Vehicle>::new(pool);
        let vehicle = repo.insert(&NewVehicle::default()).await.unwrap();
        assert_eq!(vehicle.name, None);
    }

    #[tokio::test]
    async fn test_find_related_follows_join_table() {
        let Some(pool) = pool().await else {
            return;
        };
        let user = PgUserRepository::new(pool.clone())
            .insert(&NewUser::new(unique_email("r2"), "beep"))
            .await
            .unwrap();
        let people = PgCatalogRepository::<People>::new(pool.clone());
        let luke = people
            .insert(&NewPeople {
                name: "Luke".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        PgRelationRepository::new(pool)
            .link(Relation::UserFavoritePeople, user.id, luke.id)
            .await
            .unwrap();

        let favorites = people
            .find_related(Relation::UserFavoritePeople, user.id)
            .await
            .unwrap();
        assert_eq!(favorites, vec![luke]);
    }
}
