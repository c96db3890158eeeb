//! Error taxonomy for the weather fetch pipeline.

use thiserror::Error;

/// Message shown to the user for any failed query, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch weather data. Please check the location and try again.";

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("weather provider responded with status {status}")]
    Network { status: u16 },

    #[error("no location matching '{query}'")]
    NotFound { query: String },

    #[error("unexpected weather response: {0}")]
    Parse(String),

    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search query is empty")]
    EmptyQuery,
}

impl WeatherError {
    /// User-facing text. Causes are deliberately not distinguished.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
