//! Dashboard state. Readable by anyone, writable only by [`crate::Dashboard`].

use chrono::{DateTime, Local};

use crate::{
    model::{ForecastDay, WeatherSnapshot},
    presentation::Presentation,
};

pub const DEFAULT_LOCATION: &str = "New York";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    phase: Phase,
    location_query: String,
    search_input: String,
    snapshot: Option<WeatherSnapshot>,
    forecast: Option<Vec<ForecastDay>>,
    presentation: Option<Presentation>,
    error: Option<String>,
    last_updated: Option<DateTime<Local>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION)
    }
}

impl DashboardState {
    pub fn new(location_query: &str) -> Self {
        Self {
            phase: Phase::Idle,
            location_query: location_query.to_string(),
            search_input: String::new(),
            snapshot: None,
            forecast: None,
            presentation: None,
            error: None,
            last_updated: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The query that produced the displayed data (or the startup default).
    pub fn location_query(&self) -> &str {
        &self.location_query
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn forecast(&self) -> Option<&[ForecastDay]> {
        self.forecast.as_deref()
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        self.presentation.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn has_data(&self) -> bool {
        self.snapshot.is_some() && self.forecast.is_some()
    }

    pub(crate) fn set_search_input(&mut self, text: &str) {
        self.search_input = text.to_string();
    }

    pub(crate) fn begin_loading(&mut self) {
        self.phase = Phase::Loading;
        self.error = None;
    }

    pub(crate) fn commit_success(
        &mut self,
        query: String,
        snapshot: WeatherSnapshot,
        forecast: Vec<ForecastDay>,
        now: DateTime<Local>,
    ) {
        self.presentation = Some(Presentation::derive(&snapshot));
        self.snapshot = Some(snapshot);
        self.forecast = Some(forecast);
        self.location_query = query;
        self.search_input.clear();
        self.error = None;
        self.last_updated = Some(now);
        self.phase = Phase::Ready;
    }

    /// Prior data and `last_updated` stay as they were.
    pub(crate) fn commit_failure(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.phase = Phase::Failed;
    }
}
