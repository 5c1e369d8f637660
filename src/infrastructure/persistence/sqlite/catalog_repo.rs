//! SQLite Catalog Repository
//!
//! 一个泛型实现覆盖全部目录实体，表结构由 [`CatalogTable`] 描述

use async_trait::async_trait;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::Sqlite;
use std::marker::PhantomData;

use super::DbPool;
use crate::application::ports::{CatalogRepositoryPort, RepositoryError};
use crate::domain::{EntityId, Relation};
use crate::infrastructure::persistence::{decode_error, map_sqlx_error, CatalogTable, SqlValue};

type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

fn bind_value(query: SqliteQuery<'_>, value: SqlValue) -> SqliteQuery<'_> {
    match value {
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Integer(v) => query.bind(v),
        SqlValue::Timestamp(v) => query.bind(v),
    }
}

/// SQLite 目录实体 Repository
pub struct SqliteCatalogRepository<E> {
    pool: DbPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: CatalogTable> SqliteCatalogRepository<E> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn decode_rows(rows: Vec<SqliteRow>) -> Result<Vec<E>, RepositoryError> {
        rows.iter()
            .map(|row| E::decode(row).map_err(decode_error))
            .collect()
    }
}

#[async_trait]
impl<E: CatalogTable> CatalogRepositoryPort<E> for SqliteCatalogRepository<E> {
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
            "SELECT {} FROM {} t WHERE t.id = ?",
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
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders
        );

        let mut query = sqlx::query(&sql);
        for value in E::values(draft) {
            query = bind_value(query, value);
        }

        let id = query
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .last_insert_rowid();

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
             WHERE j.{left_column} = ? ORDER BY t.id",
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
