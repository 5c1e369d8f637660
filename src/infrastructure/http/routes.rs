//! HTTP Routes
//!
//! API Endpoints:
//! - /                          GET          端点列表
//! - /user                      GET          问候
//! - /users                     GET          所有用户邮箱
//! - /users/favorites           GET          用户收藏 (?user_id=)
//! - /people, /people/:id       GET, POST    人物
//! - /planets, /planets/:id     GET, POST    星球
//! - /vehicles, /vehicles/:id   GET, POST    载具
//! - /starships, /starships/:id GET, POST    星舰
//! - /species, /species/:id     GET, POST    物种
//! - /films, /films/:id         GET, POST    电影
//! - /favorite/planet/:id       POST, DELETE 收藏/取消收藏星球 (?user_id=)
//! - /favorite/people/:id       POST, DELETE 收藏/取消收藏人物 (?user_id=)

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers::{self, CatalogResource};
use super::state::AppState;
use crate::domain::catalog::{Film, People, Planet, Species, Starship, Vehicle};

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::sitemap))
        .route("/user", get(handlers::hello_user))
        .merge(user_routes())
        .merge(catalog_routes::<People>("/people"))
        .merge(catalog_routes::<Planet>("/planets"))
        .merge(catalog_routes::<Vehicle>("/vehicles"))
        .merge(catalog_routes::<Starship>("/starships"))
        .merge(catalog_routes::<Species>("/species"))
        .merge(catalog_routes::<Film>("/films"))
        .nest("/favorite", favorite_routes())
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(handlers::list_user_emails))
        .route("/users/favorites", get(handlers::get_user_favorites))
}

/// 目录资源路由
fn catalog_routes<E: CatalogResource>(base: &str) -> Router<Arc<AppState>> {
    Router::new()
        .route(base, get(handlers::list::<E>).post(handlers::create::<E>))
        .route(&format!("{}/:id", base), get(handlers::get_one::<E>))
}

/// Favorite 路由
fn favorite_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/planet/:id",
            post(handlers::add_favorite_planet).delete(handlers::remove_favorite_planet),
        )
        .route(
            "/people/:id",
            post(handlers::add_favorite_people).delete(handlers::remove_favorite_people),
        )
}
