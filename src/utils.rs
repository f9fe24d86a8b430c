//! Shared deserialization helpers and wall-clock utilities.

use std::fmt;

use jiff::Zoned;
use serde::{
    Deserializer,
    de::{self, Visitor},
};

// ── f64 from JSON number or numeric string ─────────────────────────────────────

struct LenientF64Visitor;

impl Visitor<'_> for LenientF64Visitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a string containing a number")
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v as f64)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v as f64)
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let s = s.trim();
        if s.is_empty() {
            Ok(0.0)
        } else {
            s.parse::<f64>().map_err(de::Error::custom)
        }
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(0.0)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(0.0)
    }
}

/// Deserialize a JSON number (`1234`), numeric string (`"1234.5"`) or `null`
/// into `f64`. Empty string and `null` → `0.0`.
///
/// SQL `NUMERIC` columns come back from the API as strings, plain counts as
/// numbers; score fields accept both.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientF64Visitor)
}

/// Like [`lenient_f64`] but floors to a whole `i64` (e.g. `minutes_ago`).
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer
        .deserialize_any(LenientF64Visitor)
        .map(|v| v.floor() as i64)
}

/// Like [`lenient_f64`] but for non-negative counters; negatives clamp to `0`.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer
        .deserialize_any(LenientF64Visitor)
        .map(|v| v.max(0.0).floor() as u64)
}

// ── Wall clock ─────────────────────────────────────────────────────────────────

/// Format a zoned timestamp as a 12-hour `HH:MM AM/PM` clock string.
pub fn clock_string(now: &Zoned) -> String {
    now.strftime("%I:%M %p").to_string()
}

/// The current local time as a `HH:MM AM/PM` string.
pub fn now_clock_string() -> String {
    clock_string(&Zoned::now())
}
