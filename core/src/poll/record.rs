//! Lenient field decoding for service records
//!
//! The poll service is not strict about field types: ids come as numbers or
//! strings, texts may be `null`, timestamps use more than one format. None of
//! that may fail a whole poll, so individual fields decode through the
//! helpers below.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque record identifier, numeric or textual
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        RecordId::Number(value.into())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

/// Timestamp as sent by the service.
///
/// RFC 3339 values parse; naive `YYYY-MM-DD HH:MM:SS` values are read as UTC;
/// anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Parsed(DateTime<FixedOffset>),
    Raw(String),
}

impl Timestamp {
    pub fn parse(raw: &str) -> Self {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Timestamp::Parsed(parsed);
        }
        for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Timestamp::Parsed(naive.and_utc().fixed_offset());
            }
        }
        Timestamp::Raw(raw.to_string())
    }

    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Timestamp::Parsed(parsed) => Some(parsed),
            Timestamp::Raw(_) => None,
        }
    }
}

/// Text field: `null` and absent read as empty, scalars as their JSON text
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

/// Optional text field: `null` reads as `None`, scalars as their JSON text
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Array(_) | Value::Object(_) => None,
        other => Some(other.to_string()),
    })
}

/// Id field: numbers and strings are kept, anything else reads as `None`
pub(crate) fn record_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(match n.as_i64() {
            Some(n) => RecordId::Number(n),
            None => RecordId::Text(n.to_string()),
        }),
        Value::String(s) => Some(RecordId::Text(s)),
        _ => None,
    })
}

/// Timestamp field: strings are kept, anything else reads as `None`
pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(Timestamp::parse(&s)),
        _ => None,
    })
}
