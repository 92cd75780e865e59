//! Daily forecast document decoding.
//!
//! Reads the provider's "forecast/daily" payload:
//!
//! ```json
//! { "list": [ { "dt": 1417420800, "temp": { "max": 20.5, ... }, "weather": [ { "id": 800 } ] } ] }
//! ```
//!
//! Everything in here is pure: no I/O, no logging, no shared state.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::ExtractError;
use crate::services::condition::{icon_for_condition, IconCategory};

// --- Wire types ---

/// A decoded multi-day forecast, days in the order the provider sent them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastDocument {
    #[serde(rename = "list")]
    days: Vec<DayForecast>,
}

/// One calendar day of the forecast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayForecast {
    /// Seconds since the Unix epoch
    pub dt: i64,
    pub temp: Temperature,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Temperature {
    /// Daily maximum, in whatever unit the request asked the provider for
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WeatherCondition {
    /// Provider condition code
    pub id: i32,
}

fn malformed(message: impl Into<String>) -> ExtractError {
    ExtractError::MalformedDocument(message.into())
}

/// `value` as a JSON object; arrays and scalars are `MalformedDocument`.
fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, ExtractError> {
    value
        .as_object()
        .ok_or_else(|| malformed(format!("{} is not an object", what)))
}

/// The top-level `list` of day entries.
fn day_list(root: &Value) -> Result<&Vec<Value>, ExtractError> {
    as_object(root, "document")?
        .get("list")
        .ok_or_else(|| malformed("missing field `list`"))?
        .as_array()
        .ok_or_else(|| malformed("`list` is not an array"))
}

impl ForecastDocument {
    /// Parse a whole document. Every entry must carry `dt` and `temp.max`.
    pub fn from_json(document: &str) -> Result<Self, ExtractError> {
        let root: Value = serde_json::from_str(document)?;

        for (i, entry) in day_list(&root)?.iter().enumerate() {
            let day = as_object(entry, &format!("day {}", i))?;
            if let Some(temp) = day.get("temp") {
                as_object(temp, &format!("day {} `temp`", i))?;
            }
            if let Some(weather) = day.get("weather").and_then(Value::as_array) {
                for condition in weather {
                    as_object(condition, &format!("day {} `weather` entry", i))?;
                }
            }
        }

        Ok(serde_json::from_value(root)?)
    }

    pub fn days(&self) -> &[DayForecast] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Positional lookup: 0 is the first (earliest) day.
    pub fn day(&self, index: usize) -> Result<&DayForecast, ExtractError> {
        self.days.get(index).ok_or(ExtractError::IndexOutOfRange {
            index,
            len: self.days.len(),
        })
    }
}

impl DayForecast {
    pub fn max_temperature(&self) -> f64 {
        self.temp.max
    }

    /// The forecast date as a UTC timestamp, `None` if `dt` is out of range.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }

    /// Condition code of the day's primary weather entry.
    pub fn condition_code(&self) -> Option<i32> {
        self.weather.first().map(|w| w.id)
    }

    /// Icon for the day's primary condition; `Unknown` when there is none.
    pub fn icon(&self) -> IconCategory {
        self.condition_code()
            .map(icon_for_condition)
            .unwrap_or(IconCategory::Unknown)
    }
}

/// Maximum temperature forecast for the day at `day_index` (0 = first day).
///
/// Strictly positional: the document's order is trusted as chronological and
/// the value is returned exactly as stored, without conversion or rounding.
/// Only the selected entry is validated.
pub fn max_temperature_for_day(document: &str, day_index: usize) -> Result<f64, ExtractError> {
    let root: Value = serde_json::from_str(document)?;
    let list = day_list(&root)?;

    let entry = list.get(day_index).ok_or(ExtractError::IndexOutOfRange {
        index: day_index,
        len: list.len(),
    })?;

    let day = as_object(entry, &format!("day {}", day_index))?;
    let temp = day
        .get("temp")
        .ok_or_else(|| malformed(format!("day {}: missing field `temp`", day_index)))?;

    as_object(temp, &format!("day {} `temp`", day_index))?
        .get("max")
        .and_then(Value::as_f64)
        .ok_or_else(|| malformed(format!("day {}: `temp.max` missing or not a number", day_index)))
}
