//! Catalog Command Handlers

use std::sync::Arc;

use crate::application::commands::CreateEntity;
use crate::application::error::ApplicationError;
use crate::application::ports::CatalogRepositoryPort;
use crate::domain::{CatalogEntity, EntityDraft};

/// CreateEntity Handler
pub struct CreateEntityHandler<E: CatalogEntity> {
    repo: Arc<dyn CatalogRepositoryPort<E>>,
}

impl<E: CatalogEntity> CreateEntityHandler<E> {
    pub fn new(repo: Arc<dyn CatalogRepositoryPort<E>>) -> Self {
        Self { repo }
    }

    /// 校验请求体 → 插入 → 返回新实体
    pub async fn handle(&self, command: CreateEntity<E>) -> Result<E, ApplicationError> {
        let draft = E::Draft::from_payload(&command.payload)?;

        let entity = self.repo.insert(&draft).await?;

        tracing::info!(resource = E::RESOURCE, id = entity.id(), "Entity created");

        Ok(entity)
    }
}
