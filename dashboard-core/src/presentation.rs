//! Background theme and ambient particle choice for a classified condition.

use serde::{Deserialize, Serialize};

use crate::{
    classify::{ConditionCategory, classify, is_daytime},
    icon::{WeatherIcon, select_icon},
    model::WeatherSnapshot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientTheme {
    SunnyDay,
    ClearNight,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Overcast,
    Rain,
    Snow,
    Storm,
    Mist,
    Default,
}

impl GradientTheme {
    /// Colour stops, top-left to bottom-right.
    pub fn stops(&self) -> [&'static str; 3] {
        match self {
            Self::SunnyDay => ["yellow-400", "orange-400", "pink-500"],
            Self::ClearNight => ["indigo-900", "purple-900", "blue-900"],
            Self::PartlyCloudyDay => ["blue-400", "sky-400", "cyan-400"],
            Self::PartlyCloudyNight => ["slate-800", "slate-700", "slate-600"],
            Self::Overcast => ["gray-500", "gray-600", "gray-700"],
            Self::Rain => ["slate-600", "blue-700", "indigo-800"],
            Self::Snow => ["blue-100", "blue-300", "blue-500"],
            Self::Storm => ["gray-800", "slate-800", "purple-900"],
            Self::Mist => ["gray-400", "gray-500", "gray-600"],
            Self::Default => ["blue-400", "blue-500", "blue-600"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SunnyDay => "sunny-day",
            Self::ClearNight => "clear-night",
            Self::PartlyCloudyDay => "partly-cloudy-day",
            Self::PartlyCloudyNight => "partly-cloudy-night",
            Self::Overcast => "overcast",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Storm => "storm",
            Self::Mist => "mist",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for GradientTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [from, via, to] = self.stops();
        write!(f, "{} ({from} → {via} → {to})", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParticleSpec {
    /// Rotating sun with pulsing rays plus drifting motes of light.
    SunRays {
        rays: u8,
        floating_particles: u8,
        rotation_secs: f32,
    },
    /// Vertical streaks falling the full height of the view.
    FallingStreaks { count: u8, min_fall_secs: f32, max_fall_secs: f32 },
    /// Round flakes falling and spinning.
    FallingFlakes { count: u8, min_fall_secs: f32, max_fall_secs: f32 },
}

impl ParticleSpec {
    pub fn describe(&self) -> String {
        match self {
            Self::SunRays { rays, floating_particles, .. } => {
                format!("sun with {rays} rays, {floating_particles} floating particles")
            }
            Self::FallingStreaks { count, .. } => format!("{count} falling streaks"),
            Self::FallingFlakes { count, .. } => format!("{count} falling snowflakes"),
        }
    }
}

const SUN_RAYS: ParticleSpec =
    ParticleSpec::SunRays { rays: 12, floating_particles: 20, rotation_secs: 20.0 };
const RAIN_STREAKS: ParticleSpec =
    ParticleSpec::FallingStreaks { count: 50, min_fall_secs: 1.0, max_fall_secs: 2.0 };
const SNOWFLAKES: ParticleSpec =
    ParticleSpec::FallingFlakes { count: 30, min_fall_secs: 2.0, max_fall_secs: 4.0 };

/// Day/night variants of clear and partly-cloudy skies follow `is_night`;
/// every other category has a single theme.
pub fn select_background(category: ConditionCategory, is_night: bool) -> GradientTheme {
    use ConditionCategory as C;

    match (category, is_night) {
        (C::ClearDay | C::ClearNight, false) => GradientTheme::SunnyDay,
        (C::ClearDay | C::ClearNight, true) => GradientTheme::ClearNight,
        (C::PartlyCloudyDay | C::PartlyCloudyNight, false) => GradientTheme::PartlyCloudyDay,
        (C::PartlyCloudyDay | C::PartlyCloudyNight, true) => GradientTheme::PartlyCloudyNight,
        (C::Overcast, _) => GradientTheme::Overcast,
        (C::Rain, _) => GradientTheme::Rain,
        (C::Snow, _) => GradientTheme::Snow,
        (C::Storm, _) => GradientTheme::Storm,
        (C::Mist, _) => GradientTheme::Mist,
        (C::Unknown, _) => GradientTheme::Default,
    }
}

pub fn select_particle_effect(category: ConditionCategory, is_night: bool) -> Option<ParticleSpec> {
    use ConditionCategory as C;

    match category {
        C::ClearDay if !is_night => Some(SUN_RAYS),
        C::Rain | C::Mist => Some(RAIN_STREAKS),
        C::Snow => Some(SNOWFLAKES),
        _ => None,
    }
}

/// Everything the renderer needs to dress the current conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub category: ConditionCategory,
    pub is_night: bool,
    pub background: GradientTheme,
    pub particles: Option<ParticleSpec>,
    pub icon: WeatherIcon,
}

impl Presentation {
    pub fn derive(snapshot: &WeatherSnapshot) -> Self {
        let hour = snapshot.location.local_hour();
        let text = &snapshot.current.condition.text;
        let is_night = !is_daytime(hour);
        let category = classify(text, hour);

        Self {
            category,
            is_night,
            background: select_background(category, is_night),
            particles: select_particle_effect(category, is_night),
            icon: select_icon(text),
        }
    }

    /// Shown before any weather has loaded.
    pub fn placeholder() -> Self {
        Self {
            category: ConditionCategory::Unknown,
            is_night: false,
            background: GradientTheme::Default,
            particles: None,
            icon: WeatherIcon::Sun,
        }
    }
}
