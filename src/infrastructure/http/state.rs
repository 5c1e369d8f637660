//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddFavoriteHandler, CreateEntityHandler, FavoriteTargets, RemoveFavoriteHandler,
    // Query handlers
    GetEntityHandler, GetUserFavoritesHandler, ListEntitiesHandler, ListUserEmailsHandler,
    // Ports
    CatalogRepositoryPort, RelationRepositoryPort, UserRepositoryPort,
};
use crate::domain::catalog::{Film, People, Planet, Species, Starship, Vehicle};
use crate::domain::CatalogEntity;
use crate::infrastructure::persistence::postgres::{
    PgCatalogRepository, PgDbPool, PgRelationRepository, PgUserRepository,
};
use crate::infrastructure::persistence::sqlite::{
    DbPool, SqliteCatalogRepository, SqliteRelationRepository, SqliteUserRepository,
};
use crate::infrastructure::persistence::Database;

/// 单个目录资源的 list/get/create handlers
pub struct CatalogHandlers<E: CatalogEntity> {
    pub list: ListEntitiesHandler<E>,
    pub get: GetEntityHandler<E>,
    pub create: CreateEntityHandler<E>,
}

impl<E: CatalogEntity> CatalogHandlers<E> {
    pub fn new(repo: Arc<dyn CatalogRepositoryPort<E>>) -> Self {
        Self {
            list: ListEntitiesHandler::new(repo.clone()),
            get: GetEntityHandler::new(repo.clone()),
            create: CreateEntityHandler::new(repo),
        }
    }
}

/// 全部 Repository 端口
#[derive(Clone)]
pub struct Repositories {
    pub people: Arc<dyn CatalogRepositoryPort<People>>,
    pub planets: Arc<dyn CatalogRepositoryPort<Planet>>,
    pub vehicles: Arc<dyn CatalogRepositoryPort<Vehicle>>,
    pub starships: Arc<dyn CatalogRepositoryPort<Starship>>,
    pub species: Arc<dyn CatalogRepositoryPort<Species>>,
    pub films: Arc<dyn CatalogRepositoryPort<Film>>,
    pub users: Arc<dyn UserRepositoryPort>,
    pub relations: Arc<dyn RelationRepositoryPort>,
}

impl Repositories {
    /// SQLite 实现
    pub fn sqlite(pool: DbPool) -> Self {
        Self {
            people: Arc::new(SqliteCatalogRepository::<People>::new(pool.clone())),
            planets: Arc::new(SqliteCatalogRepository::<Planet>::new(pool.clone())),
            vehicles: Arc::new(SqliteCatalogRepository::<Vehicle>::new(pool.clone())),
            starships: Arc::new(SqliteCatalogRepository::<Starship>::new(pool.clone())),
            species: Arc::new(SqliteCatalogRepository::<Species>::new(pool.clone())),
            films: Arc::new(SqliteCatalogRepository::<Film>::new(pool.clone())),
            users: Arc::new(SqliteUserRepository::new(pool.clone())),
            relations: Arc::new(SqliteRelationRepository::new(pool)),
        }
    }

    /// PostgreSQL 实现
    pub fn postgres(pool: PgDbPool) -> Self {
        Self {
            people: Arc::new(PgCatalogRepository::<People>::new(pool.clone())),
            planets: Arc::new(PgCatalogRepository::<Planet>::new(pool.clone())),
            vehicles: Arc::new(PgCatalogRepository::<Vehicle>::new(pool.clone())),
            starships: Arc::new(PgCatalogRepository::<Starship>::new(pool.clone())),
            species: Arc::new(PgCatalogRepository::<Species>::new(pool.clone())),
            films: Arc::new(PgCatalogRepository::<Film>::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool.clone())),
            relations: Arc::new(PgRelationRepository::new(pool)),
        }
    }

    /// 按已连接的数据库选择实现
    pub fn for_database(database: &Database) -> Self {
        match database {
            Database::Sqlite(pool) => Self::sqlite(pool.clone()),
            Database::Postgres(pool) => Self::postgres(pool.clone()),
        }
    }
}

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub repos: Repositories,

    // ========== Catalog Handlers ==========
    pub people: CatalogHandlers<People>,
    pub planets: CatalogHandlers<Planet>,
    pub vehicles: CatalogHandlers<Vehicle>,
    pub starships: CatalogHandlers<Starship>,
    pub species: CatalogHandlers<Species>,
    pub films: CatalogHandlers<Film>,

    // ========== User Handlers ==========
    pub list_user_emails_handler: ListUserEmailsHandler,
    pub get_user_favorites_handler: GetUserFavoritesHandler,
    pub add_favorite_handler: AddFavoriteHandler,
    pub remove_favorite_handler: RemoveFavoriteHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(repos: Repositories) -> Self {
        let targets = FavoriteTargets::new(
            repos.users.clone(),
            repos.planets.clone(),
            repos.people.clone(),
        );

        Self {
            // Catalog handlers
            people: CatalogHandlers::new(repos.people.clone()),
            planets: CatalogHandlers::new(repos.planets.clone()),
            vehicles: CatalogHandlers::new(repos.vehicles.clone()),
            starships: CatalogHandlers::new(repos.starships.clone()),
            species: CatalogHandlers::new(repos.species.clone()),
            films: CatalogHandlers::new(repos.films.clone()),

            // User handlers
            list_user_emails_handler: ListUserEmailsHandler::new(repos.users.clone()),
            get_user_favorites_handler: GetUserFavoritesHandler::new(
                repos.users.clone(),
                repos.planets.clone(),
                repos.people.clone(),
            ),
            add_favorite_handler: AddFavoriteHandler::new(targets.clone(), repos.relations.clone()),
            remove_favorite_handler: RemoveFavoriteHandler::new(targets, repos.relations.clone()),

            repos,
        }
    }

    /// 使用 SQLite 连接池创建应用状态
    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(Repositories::sqlite(pool))
    }

    /// 使用已连接的数据库创建应用状态
    pub fn from_database(database: &Database) -> Self {
        Self::new(Repositories::for_database(database))
    }
}
