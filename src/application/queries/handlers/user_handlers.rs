//! User Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CatalogRepositoryPort, UserRepositoryPort};
use crate::application::queries::{GetUserFavorites, ListUserEmails};
use crate::domain::catalog::{People, Planet};
use crate::domain::Relation;

// ============================================================================
// Response DTOs
// ============================================================================

/// 用户收藏
#[derive(Debug, Clone, Serialize)]
pub struct UserFavorites {
    pub planets: Vec<Planet>,
    pub people: Vec<People>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListUserEmails Handler
pub struct ListUserEmailsHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUserEmailsHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, _query: ListUserEmails) -> Result<Vec<String>, ApplicationError> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(|u| u.email).collect())
    }
}

/// GetUserFavorites Handler
pub struct GetUserFavoritesHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    planet_repo: Arc<dyn CatalogRepositoryPort<Planet>>,
    people_repo: Arc<dyn CatalogRepositoryPort<People>>,
}

impl GetUserFavoritesHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        planet_repo: Arc<dyn CatalogRepositoryPort<Planet>>,
        people_repo: Arc<dyn CatalogRepositoryPort<People>>,
    ) -> Self {
        Self {
            user_repo,
            planet_repo,
            people_repo,
        }
    }

    pub async fn handle(&self, query: GetUserFavorites) -> Result<UserFavorites, ApplicationError> {
        let user = self
            .user_repo
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", query.user_id))?;

        let planets = self
            .planet_repo
            .find_related(Relation::UserFavoritePlanets, user.id)
            .await?;
        let people = self
            .people_repo
            .find_related(Relation::UserFavoritePeople, user.id)
            .await?;

        Ok(UserFavorites { planets, people })
    }
}
