//! Weather condition code → display icon mapping.
//!
//! Condition codes follow OpenWeatherMap's numbering:
//! https://openweathermap.org/weather-conditions

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// The closed set of icons the watch face can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    Storm,
    LightRain,
    Rain,
    Snow,
    Fog,
    Clear,
    LightClouds,
    Cloudy,
    Unknown,
}

impl IconCategory {
    pub const ALL: [IconCategory; 9] = [
        IconCategory::Storm,
        IconCategory::LightRain,
        IconCategory::Rain,
        IconCategory::Snow,
        IconCategory::Fog,
        IconCategory::Clear,
        IconCategory::LightClouds,
        IconCategory::Cloudy,
        IconCategory::Unknown,
    ];

    /// Snake-case identifier, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            IconCategory::Storm => "storm",
            IconCategory::LightRain => "light_rain",
            IconCategory::Rain => "rain",
            IconCategory::Snow => "snow",
            IconCategory::Fog => "fog",
            IconCategory::Clear => "clear",
            IconCategory::LightClouds => "light_clouds",
            IconCategory::Cloudy => "cloudy",
            IconCategory::Unknown => "unknown",
        }
    }

    /// Drawable resource name used by the watch face.
    ///
    /// `Unknown` has no drawable; the face leaves the icon slot empty.
    pub fn resource_name(self) -> Option<&'static str> {
        match self {
            IconCategory::Storm => Some("ic_storm"),
            IconCategory::LightRain => Some("ic_light_rain"),
            IconCategory::Rain => Some("ic_rain"),
            IconCategory::Snow => Some("ic_snow"),
            IconCategory::Fog => Some("ic_fog"),
            IconCategory::Clear => Some("ic_clear"),
            IconCategory::LightClouds => Some("ic_light_clouds"),
            IconCategory::Cloudy => Some("ic_cloudy"),
            IconCategory::Unknown => None,
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the mapping table: a code inside any of the inclusive
/// `(low, high)` bounds selects `category`.
struct IconRule {
    codes: &'static [(i32, i32)],
    category: IconCategory,
}

impl IconRule {
    const fn new(codes: &'static [(i32, i32)], category: IconCategory) -> Self {
        Self { codes, category }
    }

    fn matches(&self, code: i32) -> bool {
        self.codes
            .iter()
            .any(|&(low, high)| (low..=high).contains(&code))
    }
}

/// Evaluated top to bottom; the first matching rule wins.
///
/// NOTE: 761 falls inside the Fog range, so the `761` arm of the later Storm
/// rule never fires. Only 781 reaches Storm through that rule. Kept as-is so
/// icons stay identical to what the watch face has always shown.
const ICON_RULES: &[IconRule] = &[
    IconRule::new(&[(200, 232)], IconCategory::Storm),
    IconRule::new(&[(300, 321)], IconCategory::LightRain),
    IconRule::new(&[(500, 504)], IconCategory::Rain),
    IconRule::new(&[(511, 511)], IconCategory::Snow),
    IconRule::new(&[(520, 531)], IconCategory::Rain),
    IconRule::new(&[(600, 622)], IconCategory::Snow),
    IconRule::new(&[(701, 761)], IconCategory::Fog),
    IconRule::new(&[(761, 761), (781, 781)], IconCategory::Storm),
    IconRule::new(&[(800, 800)], IconCategory::Clear),
    IconRule::new(&[(801, 801)], IconCategory::LightClouds),
    IconRule::new(&[(802, 804)], IconCategory::Cloudy),
];

/// Map a provider condition code to the icon category to display.
///
/// Total over `i32`: codes no rule covers resolve to `IconCategory::Unknown`.
pub fn icon_for_condition(code: i32) -> IconCategory {
    ICON_RULES
        .iter()
        .find(|rule| rule.matches(code))
        .map(|rule| rule.category)
        .unwrap_or(IconCategory::Unknown)
}
