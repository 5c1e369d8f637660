//! Favorite HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{AddFavorite, RemoveFavorite};
use crate::domain::user::FavoriteKind;
use crate::infrastructure::http::dto::{MessageResponse, UserParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

use super::catalog::parse_id;

async fn add(
    state: &AppState,
    kind: FavoriteKind,
    raw_id: &str,
    params: &UserParams,
) -> Result<Json<MessageResponse>, ApiError> {
    let target_id = parse_id(kind.resource(), raw_id)?;

    state
        .add_favorite_handler
        .handle(AddFavorite {
            user_id: params.user_id(),
            kind,
            target_id,
        })
        .await?;

    Ok(Json(MessageResponse::new(kind.added_message())))
}

async fn remove(
    state: &AppState,
    kind: FavoriteKind,
    raw_id: &str,
    params: &UserParams,
) -> Result<Json<MessageResponse>, ApiError> {
    let target_id = parse_id(kind.resource(), raw_id)?;

    state
        .remove_favorite_handler
        .handle(RemoveFavorite {
            user_id: params.user_id(),
            kind,
            target_id,
        })
        .await?;

    Ok(Json(MessageResponse::new(kind.removed_message())))
}

/// 收藏星球
pub async fn add_favorite_planet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<UserParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    add(&state, FavoriteKind::Planet, &id, &params).await
}

/// 取消收藏星球
pub async fn remove_favorite_planet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<UserParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    remove(&state, FavoriteKind::Planet, &id, &params).await
}

/// 收藏人物
pub async fn add_favorite_people(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<UserParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    add(&state, FavoriteKind::People, &id, &params).await
}

/// 取消收藏人物
pub async fn remove_favorite_people(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<UserParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    remove(&state, FavoriteKind::People, &id, &params).await
}
