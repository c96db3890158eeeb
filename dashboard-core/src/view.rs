//! Read-only, display-ready projection of [`DashboardState`].

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::{
    icon::{WeatherIcon, select_icon},
    model::{ForecastDay, HourRecord},
    presentation::Presentation,
    state::{DashboardState, Phase},
};

const HOURLY_STRIP_LEN: usize = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub name: String,
    pub country: String,
    pub local_date: String,
    pub local_time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentCard {
    pub temperature: i64,
    pub condition: String,
    pub icon: WeatherIcon,
    pub high: i64,
    pub low: i64,
    pub sunrise: String,
    pub sunset: String,
    pub wind_kph: f64,
    pub humidity_pct: u8,
    pub visibility_km: f64,
    pub feels_like: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourSlot {
    pub label: String,
    pub temperature: i64,
    pub icon: WeatherIcon,
    /// `None` when there is no chance of rain.
    pub rain_chance_pct: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub label: String,
    pub condition: String,
    pub icon: WeatherIcon,
    pub high: i64,
    pub low: i64,
    pub rain_chance_pct: u8,
    pub wind_kph: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub presentation: Presentation,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<String>,
    pub can_refresh: bool,
    pub header: Option<Header>,
    pub current: Option<CurrentCard>,
    pub hourly: Vec<HourSlot>,
    pub daily: Vec<DayRow>,
}

impl DashboardView {
    /// `today` decides which forecast rows read "Today" and "Tomorrow".
    pub fn build(state: &DashboardState, today: NaiveDate) -> Self {
        let presentation = state.presentation().cloned().unwrap_or_else(Presentation::placeholder);

        let mut view = Self {
            presentation,
            loading: state.is_loading(),
            error: state.error().map(str::to_string),
            last_updated: state.last_updated().map(|t| t.format("%-I:%M:%S %p").to_string()),
            can_refresh: state.snapshot().is_some(),
            header: None,
            current: None,
            hourly: Vec::new(),
            daily: Vec::new(),
        };

        // Weather is hidden while a query is in flight, as the loading spinner
        // takes its place.
        if state.phase() == Phase::Loading {
            return view;
        }

        let (Some(snapshot), Some(days)) = (state.snapshot(), state.forecast()) else {
            return view;
        };
        let Some(first) = days.first() else {
            return view;
        };

        view.header = Some(Header {
            name: snapshot.location.name.clone(),
            country: snapshot.location.country.clone(),
            local_date: snapshot.location.local_time.format("%-m/%-d/%Y").to_string(),
            local_time: format_clock(snapshot.location.local_time),
        });

        let current = &snapshot.current;
        view.current = Some(CurrentCard {
            temperature: round_half_up(current.temperature_c),
            condition: current.condition.text.clone(),
            icon: select_icon(&current.condition.text),
            high: round_half_up(first.max_temp_c),
            low: round_half_up(first.min_temp_c),
            sunrise: first.sunrise.clone(),
            sunset: first.sunset.clone(),
            wind_kph: current.wind_kph,
            humidity_pct: current.humidity_pct,
            visibility_km: current.visibility_km,
            feels_like: round_half_up(current.feels_like_c),
        });

        view.hourly = first
            .hours
            .iter()
            .take(HOURLY_STRIP_LEN)
            .enumerate()
            .map(|(i, hour)| hour_slot(i, hour))
            .collect();

        view.daily = days.iter().map(|day| day_row(day, today)).collect();

        view
    }
}

fn hour_slot(index: usize, hour: &HourRecord) -> HourSlot {
    let label = if index == 0 { "Now".to_string() } else { format_hour(hour.time) };

    HourSlot {
        label,
        temperature: round_half_up(hour.temperature_c),
        icon: select_icon(&hour.condition.text),
        rain_chance_pct: (hour.chance_of_rain_pct > 0).then_some(hour.chance_of_rain_pct),
    }
}

fn day_row(day: &ForecastDay, today: NaiveDate) -> DayRow {
    DayRow {
        label: day_label(day.date, today),
        condition: day.condition.text.clone(),
        icon: select_icon(&day.condition.text),
        high: round_half_up(day.max_temp_c),
        low: round_half_up(day.min_temp_c),
        rain_chance_pct: day.chance_of_rain_pct,
        wind_kph: round_half_up(day.max_wind_kph),
    }
}

/// "Today", "Tomorrow", otherwise e.g. "Monday, Jun 9".
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        format!("{}, {} {}", date.format("%A"), date.format("%b"), date.day())
    }
}

/// "12 AM", "3 PM".
pub fn format_hour(time: NaiveDateTime) -> String {
    time.format("%-I %p").to_string()
}

fn format_clock(time: NaiveDateTime) -> String {
    format!("{}:{:02} {}", time.format("%-I"), time.minute(), time.format("%p"))
}

/// Rounds halves towards positive infinity (2.5 → 3, -2.5 → -2).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
