//! Data Transfer Objects

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{iso_date, Vehicle};
use crate::domain::user::DEFAULT_USER_ID;
use crate::domain::EntityId;

// ============================================================================
// 通用响应
// ============================================================================

/// 操作结果消息
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// GET /user 问候
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub msg: &'static str,
}

// ============================================================================
// Vehicle
// ============================================================================

/// 创建载具的响应：时间为 ISO-8601，并包含 image
#[derive(Debug, Serialize)]
pub struct VehicleCreatedResponse {
    pub id: EntityId,
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub length: Option<String>,
    pub cost_in_credits: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    #[serde(serialize_with = "iso_date::serialize")]
    pub created: Option<NaiveDateTime>,
    #[serde(serialize_with = "iso_date::serialize")]
    pub edited: Option<NaiveDateTime>,
    pub image: Option<String>,
}

impl From<Vehicle> for VehicleCreatedResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            name: v.name,
            model: v.model,
            vehicle_class: v.vehicle_class,
            manufacturer: v.manufacturer,
            length: v.length,
            cost_in_credits: v.cost_in_credits,
            crew: v.crew,
            passengers: v.passengers,
            max_atmosphering_speed: v.max_atmosphering_speed,
            cargo_capacity: v.cargo_capacity,
            consumables: v.consumables,
            created: v.created,
            edited: v.edited,
            image: v.image,
        }
    }
}

// ============================================================================
// 用户参数
// ============================================================================

/// `?user_id=` 查询参数
///
/// 缺失或不是整数时使用默认用户；重复出现时取第一个
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct UserParams {
    pairs: Vec<(String, String)>,
}

impl UserParams {
    pub fn user_id(&self) -> EntityId {
        self.pairs
            .iter()
            .find(|(key, _)| key == "user_id")
            .and_then(|(_, value)| value.trim().parse().ok())
            .unwrap_or(DEFAULT_USER_ID)
    }
}
