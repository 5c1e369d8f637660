//! 请求体读取器
//!
//! 按字段从 JSON 对象中读取值，并累积所有校验错误

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use super::errors::{invalid_type, missing_field, ValidationErrors, INVALID_DATE};
use super::timestamp::parse_http_date;

/// 请求体 JSON 对象
pub type Payload = Map<String, Value>;

pub struct PayloadReader<'a> {
    data: &'a Payload,
    errors: ValidationErrors,
}

impl<'a> PayloadReader<'a> {
    pub fn new(data: &'a Payload) -> Self {
        Self {
            data,
            errors: ValidationErrors::new(),
        }
    }

    /// 字段存在且不为 null
    fn present(&self, field: &str) -> Option<&'a Value> {
        self.data.get(field).filter(|v| !v.is_null())
    }

    /// 可选文本字段，数字按十进制文本接受
    pub fn text(&mut self, field: &str) -> Option<String> {
        match self.present(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => {
                self.errors.push(field, invalid_type(field));
                None
            }
        }
    }

    /// 必填文本字段
    pub fn required_text(&mut self, field: &str) -> Option<String> {
        if self.present(field).is_none() {
            self.errors.push(field, missing_field(field));
            return None;
        }
        self.text(field)
    }

    /// 可选整数字段，数字文本同样接受
    pub fn integer(&mut self, field: &str) -> Option<i64> {
        let parsed = match self.present(field)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        if parsed.is_none() {
            self.errors.push(field, invalid_type(field));
        }
        parsed
    }

    /// 必填整数字段
    pub fn required_integer(&mut self, field: &str) -> Option<i64> {
        if self.present(field).is_none() {
            self.errors.push(field, missing_field(field));
            return None;
        }
        self.integer(field)
    }

    /// 可选时间戳字段（HTTP 日期格式）
    pub fn timestamp(&mut self, field: &str) -> Option<NaiveDateTime> {
        let parsed = self
            .present(field)?
            .as_str()
            .and_then(parse_http_date);
        if parsed.is_none() {
            self.errors.push(field, INVALID_DATE);
        }
        parsed
    }

    /// 结束读取，有任何错误则返回全部错误
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_reads_text_and_numbers() {
        let data = payload(json!({"name": "Luke", "height": 172, "mass": null}));
        let mut reader = PayloadReader::new(&data);

        assert_eq!(reader.required_text("name").as_deref(), Some("Luke"));
        assert_eq!(reader.text("height").as_deref(), Some("172"));
        assert_eq!(reader.text("mass"), None);
        assert_eq!(reader.text("gender"), None);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_collects_every_problem() {
        let data = payload(json!({
            "height": [1, 2],
            "created": "2022-10-12",
            "edited": 12
        }));
        let mut reader = PayloadReader::new(&data);
        reader.required_text("name");
        reader.text("height");
        reader.timestamp("created");
        reader.timestamp("edited");

        let errors = reader.finish().unwrap_err();
        let fields: Vec<&str> = errors.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "height", "created", "edited"]);
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let data = payload(json!({"name": null}));
        let mut reader = PayloadReader::new(&data);
        assert!(reader.required_text("name").is_none());
        assert_eq!(
            reader.finish().unwrap_err().summary(),
            "Campo requerido faltante: name"
        );
    }

    #[test]
    fn test_integer_accepts_numeric_text() {
        let data = payload(json!({"episode_id": "4", "other": "four"}));
        let mut reader = PayloadReader::new(&data);
        assert_eq!(reader.required_integer("episode_id"), Some(4));
        assert_eq!(reader.integer("other"), None);
        assert!(reader.finish().is_err());
    }

    #[test]
    fn test_timestamp_parses_http_date() {
        let data = payload(json!({"created": "Wed, 12 Oct 2022 14:30:00 GMT"}));
        let mut reader = PayloadReader::new(&data);
        assert!(reader.timestamp("created").is_some());
        assert!(reader.timestamp("edited").is_none());
        assert!(reader.finish().is_ok());
    }
}
