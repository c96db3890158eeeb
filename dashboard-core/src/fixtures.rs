//! Canned weather data and a scripted provider for unit tests.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::{collections::HashMap, sync::Mutex};

use crate::{
    error::WeatherError,
    model::{Condition, CurrentConditions, ForecastDay, HourRecord, Location, WeatherSnapshot},
    provider::WeatherProvider,
};

fn condition(text: &str) -> Condition {
    Condition { text: text.to_string(), icon: format!("//cdn.weatherapi.com/{text}.png") }
}

pub(crate) fn snapshot(name: &str, country: &str, text: &str, hour: u32) -> WeatherSnapshot {
    WeatherSnapshot {
        location: Location {
            name: name.to_string(),
            country: country.to_string(),
            local_time: NaiveDate::from_ymd_opt(2025, 6, 8)
                .and_then(|d| d.and_hms_opt(hour, 15, 0))
                .expect("valid fixture time"),
        },
        current: CurrentConditions {
            temperature_c: 18.6,
            condition: condition(text),
            wind_kph: 14.4,
            humidity_pct: 72,
            visibility_km: 10.0,
            feels_like_c: 17.5,
        },
    }
}

/// `days` days starting at `start`, each with 24 hourly records.
pub(crate) fn forecast(start: NaiveDate, days: usize) -> Vec<ForecastDay> {
    (0..days)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            ForecastDay {
                date,
                max_temp_c: 22.5 + i as f64,
                min_temp_c: 11.4 + i as f64,
                condition: condition("Partly cloudy"),
                avg_humidity_pct: 65.0,
                max_wind_kph: 18.7,
                chance_of_rain_pct: (i * 10) as u8,
                sunrise: "05:42 AM".to_string(),
                sunset: "09:13 PM".to_string(),
                hours: (0..24)
                    .map(|h| HourRecord {
                        time: date.and_hms_opt(h, 0, 0).expect("valid fixture hour"),
                        temperature_c: 12.0 + f64::from(h) * 0.5,
                        condition: condition("Clear"),
                        chance_of_rain_pct: if h % 6 == 0 { 20 } else { 0 },
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Answers from a fixed script. Unknown queries get `NotFound`.
#[derive(Debug, Default)]
pub(crate) struct StubProvider {
    current: HashMap<String, Result<WeatherSnapshot, u16>>,
    forecasts: HashMap<String, Result<Vec<ForecastDay>, u16>>,
    queries: Mutex<Vec<String>>,
}

impl StubProvider {
    pub(crate) fn with_ok(mut self, query: &str, snapshot: WeatherSnapshot, days: Vec<ForecastDay>) -> Self {
        self.current.insert(query.to_string(), Ok(snapshot));
        self.forecasts.insert(query.to_string(), Ok(days));
        self
    }

    pub(crate) fn with_status(mut self, query: &str, status: u16) -> Self {
        self.current.insert(query.to_string(), Err(status));
        self.forecasts.insert(query.to_string(), Err(status));
        self
    }

    pub(crate) fn with_forecast_status(mut self, query: &str, status: u16) -> Self {
        self.forecasts.insert(query.to_string(), Err(status));
        self
    }

    /// Number of fetches issued, current and forecast counted separately.
    pub(crate) fn calls(&self) -> usize {
        self.queries.lock().expect("stub lock").len()
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("stub lock").clone()
    }

    fn record(&self, query: &str) {
        self.queries.lock().expect("stub lock").push(query.to_string());
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn fetch_current(&self, query: &str) -> Result<WeatherSnapshot, WeatherError> {
        self.record(query);
        match self.current.get(query) {
            Some(Ok(snapshot)) => Ok(snapshot.clone()),
            Some(Err(status)) => Err(WeatherError::Network { status: *status }),
            None => Err(WeatherError::NotFound { query: query.to_string() }),
        }
    }

    async fn fetch_forecast(&self, query: &str, days: u8) -> Result<Vec<ForecastDay>, WeatherError> {
        self.record(query);
        match self.forecasts.get(query) {
            Some(Ok(forecast)) => Ok(forecast.iter().take(usize::from(days)).cloned().collect()),
            Some(Err(status)) => Err(WeatherError::Network { status: *status }),
            None => Err(WeatherError::NotFound { query: query.to_string() }),
        }
    }
}
