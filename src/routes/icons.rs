//! Condition icon lookup.
//!
//! GET /api/v1/icons/:code

use axum::extract::Path;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::services::condition::{icon_for_condition, IconCategory};

/// Icon resolved for a condition code.
#[derive(Debug, Serialize, ToSchema)]
pub struct IconResponse {
    /// The condition code that was looked up
    pub code: i32,
    /// Icon category ("unknown" when no rule matches)
    pub icon: IconCategory,
    /// Drawable resource name, null for "unknown"
    pub resource: Option<String>,
}

/// Map a weather condition code to its icon. Never fails for an integer code.
#[utoipa::path(
    get,
    path = "/api/v1/icons/{code}",
    tag = "Icons",
    params(
        ("code" = i32, Path, description = "Provider weather condition code"),
    ),
    responses(
        (status = 200, description = "Icon for the condition", body = IconResponse),
        (status = 400, description = "Code is not an integer"),
    )
)]
pub async fn get_icon(Path(code): Path<i32>) -> Json<IconResponse> {
    let icon = icon_for_condition(code);
    Json(IconResponse {
        code,
        icon,
        resource: icon.resource_name().map(str::to_string),
    })
}
