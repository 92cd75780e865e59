//! Forecast decoding for the Sunshine phone app and watch face.
//!
//! The pure core lives in [`services`]: [`max_temperature_for_day`] reads one
//! day's maximum from a daily forecast document and [`icon_for_condition`]
//! reduces a condition code to an [`IconCategory`]. [`routes`] exposes the
//! same operations over HTTP.

pub mod config;
pub mod errors;
pub mod routes;
pub mod services;

pub use errors::ExtractError;
pub use services::condition::{icon_for_condition, IconCategory};
pub use services::forecast::{max_temperature_for_day, DayForecast, ForecastDocument};
pub use services::summary::{format_temperature, summarize_day, DaySummary};
