use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

use crate::{
    Config,
    error::WeatherError,
    model::{ForecastDay, WeatherSnapshot},
};

pub mod weatherapi;

pub use weatherapi::WeatherApiProvider;

/// Read-only access to a weather data source.
///
/// Implementations issue exactly one request per call and never retry;
/// failures go straight back to the caller.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(&self, query: &str) -> Result<WeatherSnapshot, WeatherError>;

    async fn fetch_forecast(&self, query: &str, days: u8)
    -> Result<Vec<ForecastDay>, WeatherError>;
}

/// Construct the weatherapi.com provider from config.
///
/// `api_key_override` wins over the key stored in the config file.
pub fn provider_from_config(
    config: &Config,
    api_key_override: Option<&str>,
) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let api_key = api_key_override
        .filter(|key| !key.trim().is_empty())
        .or(config.api_key())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No weatherapi.com API key configured.\n\
                 Hint: run `weather-dashboard configure` or set WEATHER_API_KEY."
            )
        })?;

    let provider = match config.base_url.as_deref() {
        Some(base_url) => WeatherApiProvider::with_base_url(api_key.to_owned(), base_url),
        None => WeatherApiProvider::new(api_key.to_owned()),
    };

    Ok(Arc::new(provider))
}
