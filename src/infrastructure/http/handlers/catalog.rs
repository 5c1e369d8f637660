//! Catalog HTTP Handlers
//!
//! 六种目录资源共用同一组泛型 handler

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{CreateEntity, GetEntity, ListEntities};
use crate::domain::catalog::{
    Film, People, Planet, Species, Starship, ValidationErrors, Vehicle, NOT_AN_OBJECT,
};
use crate::domain::{CatalogEntity, EntityId};
use crate::infrastructure::http::dto::VehicleCreatedResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::{AppState, CatalogHandlers};

/// 通过 HTTP 暴露的目录资源
pub trait CatalogResource: CatalogEntity + Sized {
    /// 创建失败（非校验错误）时的状态码
    const FAILURE_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

    fn handlers(state: &AppState) -> &CatalogHandlers<Self>;

    fn created(entity: Self) -> Response {
        (StatusCode::CREATED, Json(entity)).into_response()
    }
}

impl CatalogResource for People {
    fn handlers(state: &AppState) -> &CatalogHandlers<Self> {
        &state.people
    }
}

impl CatalogResource for Planet {
    fn handlers(state: &AppState) -> &CatalogHandlers<Self> {
        &state.planets
    }
}

impl CatalogResource for Vehicle {
    const FAILURE_STATUS: StatusCode = StatusCode::BAD_REQUEST;

    fn handlers(state: &AppState) -> &CatalogHandlers<Self> {
        &state.vehicles
    }

    fn created(entity: Self) -> Response {
        (StatusCode::CREATED, Json(VehicleCreatedResponse::from(entity))).into_response()
    }
}

impl CatalogResource for Starship {
    fn handlers(state: &AppState) -> &CatalogHandlers<Self> {
        &state.starships
    }
}

impl CatalogResource for Species {
    fn handlers(state: &AppState) -> &CatalogHandlers<Self> {
        &state.species
    }
}

impl CatalogResource for Film {
    fn handlers(state: &AppState) -> &CatalogHandlers<Self> {
        &state.films
    }
}

/// 路径中的 id；非整数视为资源不存在
pub(crate) fn parse_id(resource: &str, raw: &str) -> Result<EntityId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("{} not found: {}", resource, raw)))
}

/// 列出全部
pub async fn list<E: CatalogResource>(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<E>>, ApiError> {
    let items = E::handlers(&state).list.handle(ListEntities).await?;

    Ok(Json(items))
}

/// 按 id 获取
pub async fn get_one<E: CatalogResource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<E>, ApiError> {
    let id = parse_id(E::RESOURCE, &id)?;

    let item = E::handlers(&state).get.handle(GetEntity { id }).await?;

    Ok(Json(item))
}

/// 创建
pub async fn create<E: CatalogResource>(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::Invalid(ValidationErrors::body(NOT_AN_OBJECT)));
    }

    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        ApiError::failure(E::FAILURE_STATUS, format!("Failed to decode JSON object: {}", e))
    })?;

    let Value::Object(payload) = value else {
        return Err(ApiError::Invalid(ValidationErrors::body(NOT_AN_OBJECT)));
    };

    let entity = E::handlers(&state)
        .create
        .handle(CreateEntity::new(payload))
        .await
        .map_err(|e| ApiError::from_application(e, E::FAILURE_STATUS))?;

    Ok(E::created(entity))
}
