//! 时间戳编解码
//!
//! 输入和默认输出均为 HTTP 日期格式: `Wed, 12 Oct 2022 14:30:00 GMT`

use chrono::{NaiveDateTime, Weekday};
use serde::Serializer;

/// HTTP 日期格式（RFC 1123，固定 GMT）
pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// 去掉星期后的部分
const DATE_AFTER_WEEKDAY: &str = "%d %b %Y %H:%M:%S GMT";

/// ISO-8601 格式（无时区、无小数秒）
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 解析 HTTP 日期，格式不符返回 None
///
/// 星期只需是合法的缩写，不校验是否与日期一致
pub fn parse_http_date(input: &str) -> Option<NaiveDateTime> {
    let (weekday, rest) = input.split_once(", ")?;
    if weekday.len() != 3 || weekday.parse::<Weekday>().is_err() {
        return None;
    }
    NaiveDateTime::parse_from_str(rest, DATE_AFTER_WEEKDAY).ok()
}

/// `#[serde(serialize_with)]` 辅助: HTTP 日期或 null
pub mod http_date {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(&v.format(HTTP_DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}

/// `#[serde(serialize_with)]` 辅助: ISO-8601 或 null
pub mod iso_date {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(&v.format(ISO_FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_http_date() {
        let parsed = parse_http_date("Wed, 12 Oct 2022 14:30:00 GMT").unwrap();
        let expected = NaiveDate::from_ymd_opt(2022, 10, 12)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_serializers() {
        let input = "Wed, 12 Oct 2022 14:30:00 GMT";
        let parsed = parse_http_date(input);

        let http = http_date::serialize(&parsed, serde_json::value::Serializer).unwrap();
        assert_eq!(http, serde_json::json!(input));
        let iso = iso_date::serialize(&parsed, serde_json::value::Serializer).unwrap();
        assert_eq!(iso, serde_json::json!("2022-10-12T14:30:00"));
        let null = http_date::serialize(&None, serde_json::value::Serializer).unwrap();
        assert!(null.is_null());
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(parse_http_date("2022-10-12").is_none());
        assert!(parse_http_date("2022-10-12T14:30:00").is_none());
        assert!(parse_http_date("Wed, 12 Oct 2022 14:30:00").is_none());
        assert!(parse_http_date("").is_none());
        assert!(parse_http_date("Xyz, 12 Oct 2022 14:30:00 GMT").is_none());
        assert!(parse_http_date("Wednesday, 12 Oct 2022 14:30:00 GMT").is_none());
        assert!(parse_http_date("12 Oct 2022 14:30:00 GMT").is_none());
    }

    #[test]
    fn test_accepts_inconsistent_weekday() {
        // 2022-10-12 是星期三
        let parsed = parse_http_date("Mon, 12 Oct 2022 14:30:00 GMT");
        assert_eq!(parsed, parse_http_date("Wed, 12 Oct 2022 14:30:00 GMT"));
        assert!(parsed.is_some());
    }
}
