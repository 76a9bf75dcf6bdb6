use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

pub type StudentId = i64;
pub type ExamId = i64;
pub type RoomId = String;

/// Trims `value` and maps an empty result to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Query string field that treats an empty value (`?exam_id=`) as absent.
///
/// Use with `#[serde(default, deserialize_with = "blank_as_none")]`.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
