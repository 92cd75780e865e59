pub mod forecasts;
pub mod health;
pub mod icons;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors;
use crate::services;

/// Sunshine Weather API — OpenAPI specification.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sunshine Weather API",
        version = "0.1.0",
        description = "Decodes daily forecast documents into the values the Sunshine \
            watch face displays: the maximum temperature for a day and the icon for a \
            weather condition code.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Forecast", description = "Forecast document decoding"),
        (name = "Icons", description = "Condition code to icon mapping"),
    ),
    paths(
        health::health_check,
        forecasts::post_max_temperature,
        forecasts::post_day_summary,
        icons::get_icon,
    ),
    components(
        schemas(
            health::HealthResponse,
            forecasts::MaxTemperatureResponse,
            services::summary::DaySummary,
            services::condition::IconCategory,
            icons::IconResponse,
            errors::ErrorResponse,
        )
    )
)]
pub struct ApiDoc;

/// Build the full application router.
pub fn router() -> Router {
    // Stateless, read-only service; POST only carries the document to decode
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let forecast_routes = Router::new()
        .route("/api/v1/forecast/max", post(forecasts::post_max_temperature))
        .route("/api/v1/forecast/summary", post(forecasts::post_day_summary));

    let icon_routes = Router::new().route("/api/v1/icons/:code", get(icons::get_icon));

    let health_routes = Router::new().route("/api/v1/health", get(health::health_check));

    Router::new()
        .merge(health_routes)
        .merge(forecast_routes)
        .merge(icon_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
