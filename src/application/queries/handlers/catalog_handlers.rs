//! Catalog Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CatalogRepositoryPort;
use crate::application::queries::{GetEntity, ListEntities};
use crate::domain::CatalogEntity;

/// GetEntity Handler
pub struct GetEntityHandler<E: CatalogEntity> {
    repo: Arc<dyn CatalogRepositoryPort<E>>,
}

impl<E: CatalogEntity> GetEntityHandler<E> {
    pub fn new(repo: Arc<dyn CatalogRepositoryPort<E>>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, query: GetEntity) -> Result<E, ApplicationError> {
        self.repo
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(E::RESOURCE, query.id))
    }
}

/// ListEntities Handler
pub struct ListEntitiesHandler<E: CatalogEntity> {
    repo: Arc<dyn CatalogRepositoryPort<E>>,
}

impl<E: CatalogEntity> ListEntitiesHandler<E> {
    pub fn new(repo: Arc<dyn CatalogRepositoryPort<E>>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, _query: ListEntities) -> Result<Vec<E>, ApplicationError> {
        Ok(self.repo.find_all().await?)
    }
}
