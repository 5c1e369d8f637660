//! SQLite User Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{RepositoryError, UserRepositoryPort};
use crate::domain::user::{NewUser, User};
use crate::domain::EntityId;
use crate::infrastructure::persistence::map_sqlx_error;

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
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
impl UserRepositoryPort for SqliteUserRepository {
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
            sqlx::query_as(r#"SELECT id, email, password, is_active FROM "user" WHERE id = ?"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let id = sqlx::query(r#"INSERT INTO "user" (email, password, is_active) VALUES (?, ?, ?)"#)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.is_active)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .last_insert_rowid();

        Ok(User {
            id,
            email: user.email.clone(),
            password: user.password.clone(),
            is_active: user.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteUserRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteUserRepository::new(pool)
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = repo().await;
        let user = repo.insert(&NewUser::new("han@falcon.io", "kessel")).await.unwrap();
        assert_eq!(user.id, 1);

        let found = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found, user);
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_constraint_error() {
        let repo = repo().await;
        repo.insert(&NewUser::new("leia@alderaan.gov", "a")).await.unwrap();
        let err = repo
            .insert(&NewUser::new("leia@alderaan.gov", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = repo().await;
        repo.insert(&NewUser::new("a@x.io", "1")).await.unwrap();
        repo.insert(&NewUser::new("b@x.io", "2")).await.unwrap();

        let emails: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails, vec!["a@x.io", "b@x.io"]);
    }
}
