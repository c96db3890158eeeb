use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::{
    error::WeatherError,
    model::{Condition, CurrentConditions, ForecastDay, HourRecord, Location, WeatherSnapshot},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// weatherapi.com error code for "No matching location found."
const NO_MATCHING_LOCATION: u32 = 1006;

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get(
        &self,
        endpoint: &str,
        query: &str,
        extra: &[(&str, &str)],
    ) -> Result<String, WeatherError> {
        let url = format!("{}/{endpoint}", self.base_url);

        let mut params = vec![("key", self.api_key.as_str()), ("q", query)];
        params.extend_from_slice(extra);

        debug!(%url, query, "requesting weatherapi.com");

        let res = self.http.get(&url).query(&params).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, endpoint, body = %truncate_body(&body), "weatherapi.com request failed");

            if status == StatusCode::BAD_REQUEST && is_no_matching_location(&body) {
                return Err(WeatherError::NotFound { query: query.to_string() });
            }
            return Err(WeatherError::Network { status: status.as_u16() });
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn fetch_current(&self, query: &str) -> Result<WeatherSnapshot, WeatherError> {
        let body = self.get("current.json", query, &[("aqi", "no")]).await?;
        let parsed: WaCurrentResponse = serde_json::from_str(&body)?;

        Ok(parsed.into())
    }

    async fn fetch_forecast(&self, query: &str, days: u8) -> Result<Vec<ForecastDay>, WeatherError> {
        let days = days.to_string();
        let body = self
            .get("forecast.json", query, &[("days", days.as_str()), ("aqi", "no"), ("alerts", "no")])
            .await?;
        let parsed: WaForecastResponse = serde_json::from_str(&body)?;

        if parsed.forecast.forecastday.is_empty() {
            return Err(WeatherError::Parse("forecast contained no days".into()));
        }

        Ok(parsed.forecast.forecastday.into_iter().map(ForecastDay::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
    #[serde(deserialize_with = "local_datetime")]
    localtime: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
    wind_kph: f64,
    humidity: u8,
    vis_km: f64,
    feelslike_c: f64,
}

#[derive(Debug, Deserialize)]
struct WaCurrentResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: WaCondition,
    avghumidity: f64,
    maxwind_kph: f64,
    daily_chance_of_rain: u8,
}

#[derive(Debug, Deserialize)]
struct WaAstro {
    sunrise: String,
    sunset: String,
}

#[derive(Debug, Deserialize)]
struct WaHour {
    #[serde(deserialize_with = "local_datetime")]
    time: NaiveDateTime,
    temp_c: f64,
    condition: WaCondition,
    chance_of_rain: u8,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: NaiveDate,
    day: WaDay,
    astro: WaAstro,
    #[serde(default)]
    hour: Vec<WaHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    forecast: WaForecast,
}

#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: WaErrorDetail,
}

#[derive(Debug, Deserialize)]
struct WaErrorDetail {
    code: u32,
}

impl From<WaCondition> for Condition {
    fn from(c: WaCondition) -> Self {
        Self { text: c.text, icon: c.icon }
    }
}

impl From<WaCurrentResponse> for WeatherSnapshot {
    fn from(r: WaCurrentResponse) -> Self {
        Self {
            location: Location {
                name: r.location.name,
                country: r.location.country,
                local_time: r.location.localtime,
            },
            current: CurrentConditions {
                temperature_c: r.current.temp_c,
                condition: r.current.condition.into(),
                wind_kph: r.current.wind_kph,
                humidity_pct: r.current.humidity,
                visibility_km: r.current.vis_km,
                feels_like_c: r.current.feelslike_c,
            },
        }
    }
}

impl From<WaForecastDay> for ForecastDay {
    fn from(d: WaForecastDay) -> Self {
        Self {
            date: d.date,
            max_temp_c: d.day.maxtemp_c,
            min_temp_c: d.day.mintemp_c,
            condition: d.day.condition.into(),
            avg_humidity_pct: d.day.avghumidity,
            max_wind_kph: d.day.maxwind_kph,
            chance_of_rain_pct: d.day.daily_chance_of_rain,
            sunrise: d.astro.sunrise,
            sunset: d.astro.sunset,
            hours: d
                .hour
                .into_iter()
                .map(|h| HourRecord {
                    time: h.time,
                    temperature_c: h.temp_c,
                    condition: h.condition.into(),
                    chance_of_rain_pct: h.chance_of_rain,
                })
                .collect(),
        }
    }
}

/// weatherapi.com reports local times as `2025-06-08 9:05` (hour not always padded).
fn local_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M").map_err(serde::de::Error::custom)
}

fn is_no_matching_location(body: &str) -> bool {
    serde_json::from_str::<WaErrorBody>(body)
        .map(|b| b.error.code == NO_MATCHING_LOCATION)
        .unwrap_or(false)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_unpadded_local_time() {
        let json = r#"{
            "location": { "name": "Oslo", "country": "Norway", "localtime": "2025-06-08 9:05" },
            "current": {
                "temp_c": 14.2, "condition": { "text": "Light rain", "icon": "//cdn/296.png" },
                "wind_kph": 11.9, "humidity": 82, "vis_km": 10.0, "feelslike_c": 12.8
            }
        }"#;

        let snapshot: WeatherSnapshot = serde_json::from_str::<WaCurrentResponse>(json).unwrap().into();
        assert_eq!(snapshot.location.local_time.hour(), 9);
        assert_eq!(snapshot.current.condition.text, "Light rain");
        assert_eq!(snapshot.current.humidity_pct, 82);
    }

    #[test]
    fn rejects_garbled_local_time() {
        let json = r#"{
            "location": { "name": "Oslo", "country": "Norway", "localtime": "yesterday-ish" },
            "current": {
                "temp_c": 14.2, "condition": { "text": "Light rain", "icon": "" },
                "wind_kph": 11.9, "humidity": 82, "vis_km": 10.0, "feelslike_c": 12.8
            }
        }"#;

        assert!(serde_json::from_str::<WaCurrentResponse>(json).is_err());
    }

    #[test]
    fn recognises_no_matching_location_body() {
        let body = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;
        assert!(is_no_matching_location(body));
        assert!(!is_no_matching_location(r#"{"error":{"code":2006,"message":"API key is invalid."}}"#));
        assert!(!is_no_matching_location("<html>bad gateway</html>"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(300);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = WeatherApiProvider::with_base_url("KEY".into(), "http://localhost:9000/v1/");
        assert_eq!(provider.base_url, "http://localhost:9000/v1");
    }
}
