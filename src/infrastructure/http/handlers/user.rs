//! User HTTP Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GetUserFavorites, ListUserEmails, UserFavorites};
use crate::infrastructure::http::dto::{HelloResponse, UserParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /user
pub async fn hello_user() -> Json<HelloResponse> {
    Json(HelloResponse {
        msg: "Hello, this is your GET /user response ",
    })
}

/// 所有用户邮箱
pub async fn list_user_emails(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let emails = state.list_user_emails_handler.handle(ListUserEmails).await?;
    Ok(Json(emails))
}

/// 用户收藏的星球和人物
pub async fn get_user_favorites(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserParams>,
) -> Result<Json<UserFavorites>, ApiError> {
    let favorites = state
        .get_user_favorites_handler
        .handle(GetUserFavorites {
            user_id: params.user_id(),
        })
        .await?;

    Ok(Json(favorites))
}
