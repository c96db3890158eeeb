use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Number of forecast days requested per query.
pub const FORECAST_DAYS: u8 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    /// Wall-clock time at the location. Only the hour of day matters.
    pub local_time: NaiveDateTime,
}

impl Location {
    pub fn local_hour(&self) -> u32 {
        self.local_time.hour()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Provider icon reference, passed through untouched.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub condition: Condition,
    pub wind_kph: f64,
    pub humidity_pct: u8,
    pub visibility_km: f64,
    pub feels_like_c: f64,
}

/// What the current-conditions endpoint returns: where, and how it is there now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourRecord {
    pub time: NaiveDateTime,
    pub temperature_c: f64,
    pub condition: Condition,
    pub chance_of_rain_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub condition: Condition,
    pub avg_humidity_pct: f64,
    pub max_wind_kph: f64,
    pub chance_of_rain_pct: u8,
    pub sunrise: String,
    pub sunset: String,
    pub hours: Vec<HourRecord>,
}
