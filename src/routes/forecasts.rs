//! Forecast decoding HTTP endpoints.
//!
//! - POST /api/v1/forecast/max?day=N      (body: raw forecast document)
//! - POST /api/v1/forecast/summary?day=N  (body: raw forecast document)

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::{AppError, ErrorResponse};
use crate::services::forecast::max_temperature_for_day;
use crate::services::summary::{summarize_day, DaySummary};

#[derive(Debug, Deserialize, IntoParams)]
pub struct DayQuery {
    /// Zero-based day offset into the forecast (0 = first day). Defaults to 0.
    #[serde(default)]
    pub day: usize,
}

/// Maximum temperature for one forecast day.
#[derive(Debug, Serialize, ToSchema)]
pub struct MaxTemperatureResponse {
    /// Requested day offset
    pub day_index: usize,
    /// `temp.max` exactly as stored in the document
    pub max_temperature: f64,
}

/// Extract the maximum temperature for a forecast day.
///
/// The request body is the provider's daily forecast document, passed
/// through verbatim.
#[utoipa::path(
    post,
    path = "/api/v1/forecast/max",
    tag = "Forecast",
    params(DayQuery),
    request_body(content = String, description = "Daily forecast document", content_type = "application/json"),
    responses(
        (status = 200, description = "Maximum temperature for the day", body = MaxTemperatureResponse),
        (status = 400, description = "Invalid day parameter"),
        (status = 404, description = "Day index outside the forecast", body = ErrorResponse),
        (status = 422, description = "Malformed forecast document", body = ErrorResponse),
    )
)]
pub async fn post_max_temperature(
    Query(params): Query<DayQuery>,
    document: String,
) -> Result<Json<MaxTemperatureResponse>, AppError> {
    let max_temperature = max_temperature_for_day(&document, params.day)?;

    Ok(Json(MaxTemperatureResponse {
        day_index: params.day,
        max_temperature,
    }))
}

/// Summarize a forecast day for the watch face.
///
/// Unlike `/forecast/max`, every entry of the document must be well formed.
#[utoipa::path(
    post,
    path = "/api/v1/forecast/summary",
    tag = "Forecast",
    params(DayQuery),
    request_body(content = String, description = "Daily forecast document", content_type = "application/json"),
    responses(
        (status = 200, description = "Decoded day", body = DaySummary),
        (status = 400, description = "Invalid day parameter"),
        (status = 404, description = "Day index outside the forecast", body = ErrorResponse),
        (status = 422, description = "Malformed forecast document", body = ErrorResponse),
    )
)]
pub async fn post_day_summary(
    Query(params): Query<DayQuery>,
    document: String,
) -> Result<Json<DaySummary>, AppError> {
    let summary = summarize_day(&document, params.day)?;
    tracing::debug!(
        "Summarized day {}: max={} icon={}",
        summary.day_index,
        summary.max_temperature,
        summary.icon
    );
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::routes::router;

    const TWO_DAYS: &str = r#"{"list":[{"dt":1,"temp":{"max":10.5}},{"dt":2,"temp":{"max":20.0},"weather":[{"id":800}]}]}"#;

    async fn post(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_max_temperature_endpoint() {
        let (status, json) = post("/api/v1/forecast/max?day=1", TWO_DAYS).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["day_index"], 1);
        assert_eq!(json["max_temperature"], 20.0);
    }

    #[tokio::test]
    async fn test_max_temperature_defaults_to_first_day() {
        let (status, json) = post("/api/v1/forecast/max", TWO_DAYS).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["max_temperature"], 10.5);
    }

    #[tokio::test]
    async fn test_max_temperature_out_of_range() {
        let (status, json) = post("/api/v1/forecast/max?day=5", TWO_DAYS).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("out of range"));
    }

    #[tokio::test]
    async fn test_max_temperature_malformed() {
        let (status, json) = post("/api/v1/forecast/max", r#"{"days":[]}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["error"].as_str().unwrap().contains("Malformed"));
    }

    #[tokio::test]
    async fn test_max_temperature_negative_day_rejected() {
        let (status, _) = post("/api/v1/forecast/max?day=-1", TWO_DAYS).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summary_endpoint() {
        let (status, json) = post("/api/v1/forecast/summary?day=1", TWO_DAYS).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["max_label"], "20°");
        assert_eq!(json["icon"], "clear");
        assert_eq!(json["icon_resource"], "ic_clear");
        assert_eq!(json["condition_code"], 800);
    }

    #[tokio::test]
    async fn test_summary_empty_forecast() {
        let (status, _) = post("/api/v1/forecast/summary", r#"{"list":[]}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
