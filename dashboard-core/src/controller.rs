//! Drives the search → fetch → render cycle and owns the dashboard state.

use chrono::Local;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{FETCH_FAILED_MESSAGE, WeatherError},
    model::{FORECAST_DAYS, ForecastDay, WeatherSnapshot},
    provider::WeatherProvider,
    state::{DEFAULT_LOCATION, DashboardState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query or nothing to refresh; state untouched.
    Ignored,
    Ready,
    Failed,
    /// A newer query was issued after this one; its result was dropped.
    Stale,
}

/// A query that has been issued but not yet resolved.
///
/// Resolving does not borrow the dashboard, so several may be in flight.
#[derive(Debug)]
pub struct PendingQuery {
    seq: u64,
    query: String,
    provider: Arc<dyn WeatherProvider>,
}

#[derive(Debug)]
pub struct QueryOutcome {
    seq: u64,
    query: String,
    result: Result<(WeatherSnapshot, Vec<ForecastDay>), WeatherError>,
}

impl PendingQuery {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Fetch current conditions and forecast concurrently. Either failing
    /// fails the whole query.
    pub async fn resolve(self) -> QueryOutcome {
        let result = tokio::try_join!(
            self.provider.fetch_current(&self.query),
            self.provider.fetch_forecast(&self.query, FORECAST_DAYS),
        );

        QueryOutcome { seq: self.seq, query: self.query, result }
    }
}

impl QueryOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
pub struct Dashboard {
    provider: Arc<dyn WeatherProvider>,
    state: DashboardState,
    latest_seq: u64,
}

impl Dashboard {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self::with_default_location(provider, DEFAULT_LOCATION)
    }

    pub fn with_default_location(provider: Arc<dyn WeatherProvider>, location: &str) -> Self {
        Self { provider, state: DashboardState::new(location), latest_seq: 0 }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Initial load of the default location.
    pub async fn start(&mut self) -> SearchOutcome {
        let query = self.state.location_query().to_string();
        self.search(&query).await
    }

    pub fn set_search_input(&mut self, text: &str) {
        self.state.set_search_input(text);
    }

    /// Search whatever is currently typed in the search box.
    pub async fn submit(&mut self) -> SearchOutcome {
        let query = self.state.search_input().to_string();
        self.search(&query).await
    }

    #[instrument(skip(self))]
    pub async fn search(&mut self, query: &str) -> SearchOutcome {
        let pending = match self.begin_search(query) {
            Ok(pending) => pending,
            Err(_) => return SearchOutcome::Ignored,
        };

        let outcome = pending.resolve().await;
        self.apply(outcome)
    }

    /// Re-run the search for the location currently on screen.
    pub async fn refresh(&mut self) -> SearchOutcome {
        let Some(name) = self.state.snapshot().map(|s| s.location.name.clone()) else {
            debug!("refresh requested before anything loaded");
            return SearchOutcome::Ignored;
        };

        self.search(&name).await
    }

    /// Enter the loading phase and hand back the query to resolve.
    ///
    /// Fails with [`WeatherError::EmptyQuery`] for blank input, leaving state untouched.
    pub fn begin_search(&mut self, query: &str) -> Result<PendingQuery, WeatherError> {
        let query = query.trim();
        if query.is_empty() {
            debug!("ignoring blank search");
            return Err(WeatherError::EmptyQuery);
        }

        self.latest_seq += 1;
        self.state.begin_loading();
        debug!(seq = self.latest_seq, query, "search issued");

        Ok(PendingQuery {
            seq: self.latest_seq,
            query: query.to_string(),
            provider: Arc::clone(&self.provider),
        })
    }

    /// Commit a resolved query, unless a newer one has been issued since.
    pub fn apply(&mut self, outcome: QueryOutcome) -> SearchOutcome {
        if outcome.seq != self.latest_seq {
            debug!(
                seq = outcome.seq,
                latest = self.latest_seq,
                query = %outcome.query,
                "dropping stale result"
            );
            return SearchOutcome::Stale;
        }

        match outcome.result {
            Ok((snapshot, forecast)) => {
                info!(
                    query = %outcome.query,
                    location = %snapshot.location.name,
                    days = forecast.len(),
                    "weather loaded"
                );
                self.state.commit_success(outcome.query, snapshot, forecast, Local::now());
                SearchOutcome::Ready
            }
            Err(err) => {
                warn!(query = %outcome.query, error = %err, "weather fetch failed");
                self.state.commit_failure(FETCH_FAILED_MESSAGE);
                SearchOutcome::Failed
            }
        }
    }
}
