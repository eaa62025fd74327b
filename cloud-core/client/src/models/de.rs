//! 平台 JSON 中特殊标量的序列化辅助
//!
//! 平台返回的数值字段可能是数字，也可能是数字字符串；配额字段还可能是
//! 字面量 `"Unlimited"`；布尔字段可能是 `"true"` 字符串；时间戳格式为
//! `yyyy-MM-dd'T'HH:mm:ssZ`（如 `2012-06-05T16:31:47-0700`）。

use chrono::{DateTime, FixedOffset};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};
use serde_json::Value;

/// 平台时间戳格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// 配额字面量，表示无限制
pub const UNLIMITED: &str = "Unlimited";

fn u64_from_value<E: de::Error>(value: &Value) -> Result<Option<u64>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| E::custom(format!("数值不是非负整数: {}", n))),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case(UNLIMITED) {
                Ok(None)
            } else {
                s.parse::<u64>()
                    .map(Some)
                    .map_err(|e| E::custom(format!("无法解析数值 {:?}: {}", s, e)))
            }
        }
        other => Err(E::custom(format!("期望数值，实际为: {}", other))),
    }
}

/// 字符串或数字形式的标识符
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("期望标识符，实际为: {}", other))),
    }
}

/// 可选标识符，兼容数字；null 为 `None`
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!("期望标识符，实际为: {}", other))),
    }
}

/// 非负计数（用量/总量），缺失或为 null 时为 0
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(u64_from_value(&value)?.unwrap_or(0))
}

/// 可选数值，兼容数字字符串
pub mod opt_u64 {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        u64_from_value(&value)
    }

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_u64(*v),
            None => serializer.serialize_none(),
        }
    }
}

/// 配额字段：`"Unlimited"`、null 或缺失均为 `None`
pub mod limit {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        u64_from_value(&value)
    }

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_u64(*v),
            None => serializer.serialize_str(UNLIMITED),
        }
    }
}

/// 布尔值，兼容 `"true"` / `"false"` 字符串；缺失时为 false
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(de::Error::custom(format!("无法解析布尔值: {}", other))),
        },
        other => Err(de::Error::custom(format!("期望布尔值，实际为: {}", other))),
    }
}

/// 平台时间戳
pub mod timestamp {
    use super::*;

    pub fn parse(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_str(s, TIMESTAMP_FORMAT)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => parse(&s)
                .map(Some)
                .map_err(|e| de::Error::custom(format!("无法解析时间 {:?}: {}", s, e))),
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<FixedOffset>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Quota {
        #[serde(default, with = "limit")]
        limit: Option<u64>,
        #[serde(default, deserialize_with = "count")]
        total: u64,
        #[serde(default, deserialize_with = "flag")]
        enabled: bool,
    }

    #[test]
    fn test_unlimited_is_none() {
        let q: Quota = serde_json::from_str(r#"{"limit":"Unlimited","total":3}"#).unwrap();
        assert_eq!(q.limit, None);
        assert_eq!(q.total, 3);
    }

    #[test]
    fn test_numeric_string_limit() {
        let q: Quota = serde_json::from_str(r#"{"limit":"20","total":"7","enabled":"true"}"#).unwrap();
        assert_eq!(q.limit, Some(20));
        assert_eq!(q.total, 7);
        assert!(q.enabled);
    }

    #[test]
    fn test_missing_fields_default() {
        let q: Quota = serde_json::from_str("{}").unwrap();
        assert_eq!(q.limit, None);
        assert_eq!(q.total, 0);
        assert!(!q.enabled);
    }

    #[test]
    fn test_negative_total_rejected() {
        let r: Result<Quota, _> = serde_json::from_str(r#"{"total":-1}"#);
        assert!(r.is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Reference {
        #[serde(deserialize_with = "id")]
        id: String,
        #[serde(default, deserialize_with = "opt_id")]
        parent: Option<String>,
    }

    #[test]
    fn test_numeric_ids() {
        let r: Reference = serde_json::from_str(r#"{"id":505,"parent":457}"#).unwrap();
        assert_eq!(r.id, "505");
        assert_eq!(r.parent.as_deref(), Some("457"));

        let r: Reference = serde_json::from_str(r#"{"id":"a1","parent":null}"#).unwrap();
        assert_eq!(r.id, "a1");
        assert_eq!(r.parent, None);

        let r: Reference = serde_json::from_str(r#"{"id":"a1"}"#).unwrap();
        assert_eq!(r.parent, None);

        assert!(serde_json::from_str::<Reference>(r#"{"id":true}"#).is_err());
    }

    #[test]
    fn test_timestamp_parse() {
        let dt = timestamp::parse("2012-06-05T16:31:47-0700").unwrap();
        assert_eq!(dt.format(TIMESTAMP_FORMAT).to_string(), "2012-06-05T16:31:47-0700");
        assert_eq!(dt.offset().local_minus_utc(), -7 * 3600);
    }
}
