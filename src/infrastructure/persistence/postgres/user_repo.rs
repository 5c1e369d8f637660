//! PostgreSQL User Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::PgDbPool;
use crate::application::ports::{RepositoryError, UserRepositoryPort};
use crate::domain::user::{NewUser, User};
use crate::domain::EntityId;
use crate::infrastructure::persistence::map_sqlx_error;

/// PostgreSQL User Repository
pub struct PgUserRepository {
    pool: PgDbPool,
}

impl PgUserRepository {
    pub fn new(pool: PgDbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password: String,
    is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password: row.password,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl UserRepositoryPort for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows: Vec<UserRow> =
            sqlx::query_as(r#"SELECT id, email, password, is_active FROM "user" ORDER BY id"#)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, RepositoryError> {
        let row: Option<UserRow> =
            sqlx::query_as(r#"SELECT id, email, password, is_active FROM "user" WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO "user" (email, password, is_active) VALUES ($1, $2, $3)
            RETURNING id, email, password, is_active
            "#,
        )
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(User::from(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::postgres::test_support::{pool, unique_email};

    #[tokio::test]
    async fn test_duplicate_email_is_constraint_error() {
        let Some(pool) = pool().await else {
            return;
        };
        let repo = PgUserRepository::new(pool);
        let email = unique_email("leia");

        let user = repo.insert(&NewUser::new(email.clone(), "a")).await.unwrap();
        assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user));

        let err = repo.insert(&NewUser::new(email, "b")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }
}
