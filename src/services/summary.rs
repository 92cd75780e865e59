//! What the watch face needs for one day: max temperature, its label and the
//! condition icon.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::ExtractError;
use crate::services::condition::IconCategory;
use crate::services::forecast::ForecastDocument;

/// Display label for a temperature: the integer part followed by `°`.
///
/// Truncates toward zero (`-3.7` → `"-3°"`). NaN shows as `0°` and values
/// beyond `i32` saturate.
pub fn format_temperature(value: f64) -> String {
    format!("{}°", value as i32)
}

/// Decoded view of a single forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DaySummary {
    /// Position of the day in the forecast (0 = first day)
    pub day_index: usize,
    /// Forecast date (ISO 8601), null if the timestamp is out of range
    pub date: Option<DateTime<Utc>>,
    /// Maximum temperature exactly as found in the document
    pub max_temperature: f64,
    /// Label shown on the watch face, e.g. "20°"
    pub max_label: String,
    /// Provider condition code of the day's primary weather entry
    pub condition_code: Option<i32>,
    /// Icon category derived from the condition code
    pub icon: IconCategory,
    /// Drawable resource name, null when there is no icon to draw
    pub icon_resource: Option<String>,
}

/// Summarize the day at `day_index` of a full forecast document.
pub fn summarize_day(document: &str, day_index: usize) -> Result<DaySummary, ExtractError> {
    let forecast = ForecastDocument::from_json(document)?;
    let day = forecast.day(day_index)?;
    let icon = day.icon();

    Ok(DaySummary {
        day_index,
        date: day.date(),
        max_temperature: day.max_temperature(),
        max_label: format_temperature(day.max_temperature()),
        condition_code: day.condition_code(),
        icon,
        icon_resource: icon.resource_name().map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_temperature_truncates() {
        assert_eq!(format_temperature(20.9), "20°");
        assert_eq!(format_temperature(20.0), "20°");
        assert_eq!(format_temperature(-3.7), "-3°");
        assert_eq!(format_temperature(-0.4), "0°");
    }

    #[test]
    fn test_format_temperature_non_finite() {
        assert_eq!(format_temperature(f64::NAN), "0°");
        assert_eq!(format_temperature(f64::INFINITY), format!("{}°", i32::MAX));
        assert_eq!(format_temperature(f64::NEG_INFINITY), format!("{}°", i32::MIN));
    }

    #[test]
    fn test_format_temperature_saturates_at_i32() {
        assert_eq!(format_temperature(3.0e10), "2147483647°");
        assert_eq!(format_temperature(-3.0e10), "-2147483648°");
    }

    #[test]
    fn test_summarize_day() {
        let doc = serde_json::json!({
            "list": [
                { "dt": 1417420800, "temp": { "min": 2.0, "max": 8.6 }, "weather": [{ "id": 602 }] },
                { "dt": 1417507200, "temp": { "min": 4.0, "max": 11.2 }, "weather": [{ "id": 803 }] }
            ]
        })
        .to_string();

        let summary = summarize_day(&doc, 1).unwrap();
        assert_eq!(summary.day_index, 1);
        assert_eq!(summary.max_temperature, 11.2);
        assert_eq!(summary.max_label, "11°");
        assert_eq!(summary.condition_code, Some(803));
        assert_eq!(summary.icon, IconCategory::Cloudy);
        assert_eq!(summary.icon_resource.as_deref(), Some("ic_cloudy"));
        assert_eq!(
            summary.date.unwrap().to_rfc3339(),
            "2014-12-02T08:00:00+00:00"
        );
    }

    #[test]
    fn test_summarize_day_without_condition() {
        let doc = r#"{"list":[{"dt":1,"temp":{"max":-1.5}}]}"#;
        let summary = summarize_day(doc, 0).unwrap();
        assert_eq!(summary.icon, IconCategory::Unknown);
        assert_eq!(summary.icon_resource, None);
        assert_eq!(summary.max_label, "-1°");
    }

    #[test]
    fn test_summarize_day_out_of_range() {
        assert_eq!(
            summarize_day(r#"{"list":[]}"#, 0),
            Err(ExtractError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_summarize_day_rejects_positional_entry() {
        let err = summarize_day(r#"{"list":[[1,[5.0]]]}"#, 0).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedDocument(_)));
    }

    #[test]
    fn test_summary_serializes_icon_as_snake_case() {
        let doc = r#"{"list":[{"dt":1,"temp":{"max":3.0},"weather":[{"id":300}]}]}"#;
        let json = serde_json::to_value(summarize_day(doc, 0).unwrap()).unwrap();
        assert_eq!(json["icon"], "light_rain");
        assert_eq!(json["icon_resource"], "ic_light_rain");
    }
}
