//! Catalog Context - 目录限界上下文
//!
//! 职责:
//! - 人物、星球、载具、星舰、物种、电影实体
//! - 请求体到新实体草稿的校验
//! - 时间戳格式

mod entities;
mod errors;
mod payload;
mod timestamp;

pub use entities::{
    Film, NewFilm, NewPeople, NewPlanet, NewSpecies, NewStarship, NewVehicle, People, Planet,
    Species, Starship, Vehicle,
};
pub use errors::{
    invalid_type, missing_field, FieldError, ValidationErrors, INVALID_DATE, NOT_AN_OBJECT,
};
pub use payload::{Payload, PayloadReader};
pub use timestamp::{http_date, iso_date, parse_http_date};

use serde::Serialize;

/// 实体标识：自增整数，创建后不可变
pub type EntityId = i64;

/// 目录实体
pub trait CatalogEntity: Serialize + Send + Sync + 'static {
    /// 资源名（用于错误消息和日志）
    const RESOURCE: &'static str;

    /// 创建时使用的草稿类型
    type Draft: EntityDraft;

    fn id(&self) -> EntityId;
}

/// 新实体草稿，从请求体校验构造
pub trait EntityDraft: Sized + Send + Sync + 'static {
    fn from_payload(data: &Payload) -> Result<Self, ValidationErrors>;
}
