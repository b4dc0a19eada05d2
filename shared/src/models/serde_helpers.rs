//! Serde helpers for the loosely-typed JSON the UI produces
//!
//! Dates arrive as ISO-8601 timestamps (`2026-04-25T00:00:00.000Z`), plain
//! dates (`2026-04-25`) or an empty string meaning "not set".

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse an ISO timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
///
/// Blank input yields `Ok(None)`.
pub fn parse_flexible_datetime(value: &str) -> Result<Option<DateTime<Utc>>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| format!("invalid date: {}", value))
}

/// Format like JavaScript's `Date.prototype.toISOString`
pub fn format_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `Option<DateTime<Utc>>` stored as an ISO string, `""` when unset
pub mod optional_datetime {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&format_iso(dt)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(s) => parse_flexible_datetime(&s).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Deserialize a string that may be `null` as empty
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
