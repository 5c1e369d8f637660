//! Catalog Context - Errors

use serde::Serialize;
use thiserror::Error;

pub const NOT_AN_OBJECT: &str = "Los datos deben ser un objeto JSON.";
pub const INVALID_DATE: &str = "Formato de fecha inválido";

pub fn missing_field(field: &str) -> String {
    format!("Campo requerido faltante: {}", field)
}

pub fn invalid_type(field: &str) -> String {
    format!("Tipo de dato inválido para el campo: {}", field)
}

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// 请求体校验错误集合
///
/// 一次性收集所有字段问题，而不是遇到第一个就返回
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.summary())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 整个请求体（而非某个字段）无效
    pub fn body(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push("", message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// 去重后的错误消息，以 "; " 连接
    pub fn summary(&self) -> String {
        let mut messages: Vec<&str> = Vec::with_capacity(self.0.len());
        for error in &self.0 {
            if !messages.contains(&error.message.as_str()) {
                messages.push(&error.message);
            }
        }
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_error_summary_is_the_message() {
        let mut errors = ValidationErrors::new();
        errors.push("name", missing_field("name"));
        assert_eq!(errors.summary(), "Campo requerido faltante: name");
    }

    #[test]
    fn test_summary_deduplicates_messages() {
        let mut errors = ValidationErrors::new();
        errors.push("name", missing_field("name"));
        errors.push("created", INVALID_DATE);
        errors.push("edited", INVALID_DATE);

        assert_eq!(errors.fields().len(), 3);
        assert_eq!(
            errors.summary(),
            "Campo requerido faltante: name; Formato de fecha inválido"
        );
    }
}
