//! Core library for the `weather-dashboard` tool.
//!
//! This crate defines:
//! - Configuration & API key handling
//! - The weather provider abstraction and the weatherapi.com client
//! - Condition classification, icons and background/particle presentation
//! - The dashboard state and the controller that owns it
//!
//! It is used by `dashboard-cli`, but knows nothing about terminals.

pub mod classify;
pub mod config;
pub mod controller;
pub mod error;
pub mod icon;
pub mod model;
pub mod presentation;
pub mod provider;
pub mod state;
pub mod view;

#[cfg(test)]
mod fixtures;

pub use classify::{ConditionCategory, classify, is_daytime};
pub use config::Config;
pub use controller::{Dashboard, PendingQuery, QueryOutcome, SearchOutcome};
pub use error::{FETCH_FAILED_MESSAGE, WeatherError};
pub use icon::{WeatherIcon, select_icon};
pub use model::{Condition, CurrentConditions, ForecastDay, HourRecord, Location, WeatherSnapshot};
pub use presentation::{GradientTheme, ParticleSpec, Presentation, select_background, select_particle_effect};
pub use provider::{WeatherApiProvider, WeatherProvider, provider_from_config};
pub use state::{DEFAULT_LOCATION, DashboardState, Phase};
pub use view::DashboardView;
