//! Favorite Command Handlers
//!
//! 用户和目标都必须存在；添加/移除都是幂等的

use std::sync::Arc;

use crate::application::commands::{AddFavorite, RemoveFavorite};
use crate::application::error::ApplicationError;
use crate::application::ports::{CatalogRepositoryPort, RelationRepositoryPort, UserRepositoryPort};
use crate::domain::catalog::{People, Planet};
use crate::domain::user::FavoriteKind;
use crate::domain::{EntityId, Relation};

/// 收藏操作的存在性检查
#[derive(Clone)]
pub struct FavoriteTargets {
    user_repo: Arc<dyn UserRepositoryPort>,
    planet_repo: Arc<dyn CatalogRepositoryPort<Planet>>,
    people_repo: Arc<dyn CatalogRepositoryPort<People>>,
}

impl FavoriteTargets {
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

    /// 用户不存在或目标不存在时返回 NotFound（先检查用户）
    async fn ensure_exists(
        &self,
        user_id: EntityId,
        kind: FavoriteKind,
        target_id: EntityId,
    ) -> Result<(), ApplicationError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", user_id))?;

        let exists = match kind {
            FavoriteKind::Planet => self.planet_repo.find_by_id(target_id).await?.is_some(),
            FavoriteKind::People => self.people_repo.find_by_id(target_id).await?.is_some(),
        };
        if !exists {
            return Err(ApplicationError::not_found(kind.resource(), target_id));
        }

        Ok(())
    }
}

// ============================================================================
// AddFavorite
// ============================================================================

/// AddFavorite Handler
pub struct AddFavoriteHandler {
    targets: FavoriteTargets,
    relation_repo: Arc<dyn RelationRepositoryPort>,
}

impl AddFavoriteHandler {
    pub fn new(targets: FavoriteTargets, relation_repo: Arc<dyn RelationRepositoryPort>) -> Self {
        Self {
            targets,
            relation_repo,
        }
    }

    /// 返回是否新增了收藏（已存在时为 false）
    pub async fn handle(&self, command: AddFavorite) -> Result<bool, ApplicationError> {
        self.targets
            .ensure_exists(command.user_id, command.kind, command.target_id)
            .await?;

        let relation = Relation::favorites(command.kind);
        let added = !self
            .relation_repo
            .contains(relation, command.user_id, command.target_id)
            .await?
            && self
                .relation_repo
                .link(relation, command.user_id, command.target_id)
                .await?;

        tracing::info!(
            user_id = command.user_id,
            kind = %command.kind,
            target_id = command.target_id,
            added,
            "Favorite added"
        );

        Ok(added)
    }
}

// ============================================================================
// RemoveFavorite
// ============================================================================

/// RemoveFavorite Handler
pub struct RemoveFavoriteHandler {
    targets: FavoriteTargets,
    relation_repo: Arc<dyn RelationRepositoryPort>,
}

impl RemoveFavoriteHandler {
    pub fn new(targets: FavoriteTargets, relation_repo: Arc<dyn RelationRepositoryPort>) -> Self {
        Self {
            targets,
            relation_repo,
        }
    }

    /// 返回是否确实移除了收藏（原本不存在时为 false）
    pub async fn handle(&self, command: RemoveFavorite) -> Result<bool, ApplicationError> {
        self.targets
            .ensure_exists(command.user_id, command.kind, command.target_id)
            .await?;

        let relation = Relation::favorites(command.kind);
        let removed = self
            .relation_repo
            .contains(relation, command.user_id, command.target_id)
            .await?
            && self
                .relation_repo
                .unlink(relation, command.user_id, command.target_id)
                .await?;

        tracing::info!(
            user_id = command.user_id,
            kind = %command.kind,
            target_id = command.target_id,
            removed,
            "Favorite removed"
        );

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::NewPlanet;
    use crate::domain::user::NewUser;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteCatalogRepository,
        SqliteRelationRepository, SqliteUserRepository,
    };

    struct Fixture {
        add: AddFavoriteHandler,
        remove: RemoveFavoriteHandler,
        relations: Arc<dyn RelationRepositoryPort>,
        user_id: EntityId,
        planet_id: EntityId,
    }

    async fn fixture() -> Fixture {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let users: Arc<dyn UserRepositoryPort> = Arc::new(SqliteUserRepository::new(pool.clone()));
        let planets: Arc<dyn CatalogRepositoryPort<Planet>> =
            Arc::new(SqliteCatalogRepository::<Planet>::new(pool.clone()));
        let people: Arc<dyn CatalogRepositoryPort<People>> =
            Arc::new(SqliteCatalogRepository::<People>::new(pool.clone()));
        let relations: Arc<dyn RelationRepositoryPort> =
            Arc::new(SqliteRelationRepository::new(pool));

        let user_id = users.insert(&NewUser::new("ackbar@mon.cal", "trap")).await.unwrap().id;
        let planet_id = planets
            .insert(&NewPlanet {
                name: "Dagobah".to_string(),
                ..Default::default()
            })
            .await
            .unwrap()
            .id;

        let targets = FavoriteTargets::new(users, planets, people);
        Fixture {
            add: AddFavoriteHandler::new(targets.clone(), relations.clone()),
            remove: RemoveFavoriteHandler::new(targets, relations.clone()),
            relations,
            user_id,
            planet_id,
        }
    }

    #[tokio::test]
    async fn test_add_reports_whether_link_is_new() {
        let f = fixture().await;
        let command = AddFavorite {
            user_id: f.user_id,
            kind: FavoriteKind::Planet,
            target_id: f.planet_id,
        };

        assert!(f.add.handle(command).await.unwrap());
        assert!(!f.add.handle(command).await.unwrap());
        assert!(f
            .relations
            .contains(Relation::UserFavoritePlanets, f.user_id, f.planet_id)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_remove_absent_favorite_is_false() {
        let f = fixture().await;
        let command = RemoveFavorite {
            user_id: f.user_id,
            kind: FavoriteKind::Planet,
            target_id: f.planet_id,
        };
        assert!(!f.remove.handle(command).await.unwrap());

        f.add
            .handle(AddFavorite {
                user_id: f.user_id,
                kind: FavoriteKind::Planet,
                target_id: f.planet_id,
            })
            .await
            .unwrap();
        assert!(f.remove.handle(command).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_user_is_checked_first() {
        let f = fixture().await;
        let err = f
            .add
            .handle(AddFavorite {
                user_id: 99,
                kind: FavoriteKind::People,
                target_id: 99,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
        assert_eq!(err.to_string(), "User not found: 99");
    }
}
