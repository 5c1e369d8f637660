//! HTTP Error Handling
//!
//! 两种响应体：
//! - 未找到: `{"message": ..., "status_code": 404}`
//! - 其他错误: `{"error": ...}`，校验错误额外带 `fields`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::catalog::{FieldError, ValidationErrors};

/// 自定义错误响应（消息 + 状态码）
#[derive(Debug, Serialize)]
pub struct MessageErrorResponse {
    pub message: String,
    pub status_code: u16,
}

/// 处理器错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: Vec::new(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 资源不存在 → 404
    NotFound(String),
    /// 请求体校验失败 → 400
    Invalid(ValidationErrors),
    /// 其他失败，状态码由 handler 决定
    Failure { status: StatusCode, message: String },
}

impl ApiError {
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Failure {
            status,
            message: message.into(),
        }
    }

    /// 应用层错误映射；非校验、非未找到的错误使用 `failure_status`
    pub fn from_application(err: ApplicationError, failure_status: StatusCode) -> Self {
        match err {
            ApplicationError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            ApplicationError::ValidationError(errors) => ApiError::Invalid(errors),
            ApplicationError::RepositoryError(msg) | ApplicationError::InternalError(msg) => {
                ApiError::failure(failure_status, msg)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                tracing::warn!(error = %message, "Resource not found");
                let status = StatusCode::NOT_FOUND;
                let body = MessageErrorResponse {
                    message,
                    status_code: status.as_u16(),
                };
                (status, Json(body)).into_response()
            }
            ApiError::Invalid(errors) => {
                tracing::warn!(error = %errors, "Invalid request body");
                let body = ErrorResponse {
                    error: errors.summary(),
                    fields: errors
                        .fields()
                        .iter()
                        .filter(|f| !f.field.is_empty())
                        .cloned()
                        .collect(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Failure { status, message } => {
                if status.is_server_error() {
                    tracing::error!(status = status.as_u16(), error = %message, "Request failed");
                } else {
                    tracing::warn!(status = status.as_u16(), error = %message, "Request failed");
                }
                (status, Json(ErrorResponse::new(message))).into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        ApiError::from_application(e, StatusCode::INTERNAL_SERVER_ERROR)
    }
}
