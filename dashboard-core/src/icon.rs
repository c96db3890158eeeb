//! Icon choice for a condition label.
//!
//! Icons follow their own keyword table, separate from the background
//! classifier: they react to "shower" and "blizzard" and split drizzle from rain.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Sun,
    Moon,
    CloudMoon,
    PartlyCloudy,
    Cloud,
    CloudRain,
    CloudDrizzle,
    CloudSnow,
    CloudLightning,
}

impl WeatherIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Sun => "☀",
            Self::Moon => "☾",
            Self::CloudMoon => "☁☾",
            Self::PartlyCloudy => "⛅",
            Self::Cloud => "☁",
            Self::CloudRain => "🌧",
            Self::CloudDrizzle => "🌦",
            Self::CloudSnow => "❄",
            Self::CloudLightning => "⛈",
        }
    }

    pub fn tint(&self) -> &'static str {
        match self {
            Self::Sun => "yellow-300",
            Self::Moon | Self::CloudMoon | Self::CloudDrizzle => "blue-200",
            Self::PartlyCloudy => "gray-200",
            Self::Cloud => "gray-300",
            Self::CloudRain => "blue-300",
            Self::CloudSnow => "white",
            Self::CloudLightning => "purple-300",
        }
    }
}

/// Matches when every keyword in `all` is present and, if `any` is non-empty,
/// at least one of `any` is too.
struct IconRule {
    all: &'static [&'static str],
    any: &'static [&'static str],
    icon: WeatherIcon,
}

const ICON_RULES: &[IconRule] = &[
    IconRule { all: &[], any: &["sunny", "clear day"], icon: WeatherIcon::Sun },
    IconRule { all: &[], any: &["clear night"], icon: WeatherIcon::Moon },
    IconRule { all: &["partly cloudy", "night"], any: &[], icon: WeatherIcon::CloudMoon },
    IconRule { all: &[], any: &["partly cloudy", "partly sunny"], icon: WeatherIcon::PartlyCloudy },
    IconRule { all: &[], any: &["overcast", "cloudy"], icon: WeatherIcon::Cloud },
    IconRule { all: &[], any: &["rain", "shower"], icon: WeatherIcon::CloudRain },
    IconRule { all: &[], any: &["drizzle", "mist"], icon: WeatherIcon::CloudDrizzle },
    IconRule { all: &[], any: &["snow", "blizzard"], icon: WeatherIcon::CloudSnow },
    IconRule { all: &[], any: &["thunder", "storm"], icon: WeatherIcon::CloudLightning },
];

impl IconRule {
    fn matches(&self, label: &str) -> bool {
        self.all.iter().all(|kw| label.contains(kw))
            && (self.any.is_empty() || self.any.iter().any(|kw| label.contains(kw)))
    }
}

pub fn select_icon(condition_text: &str) -> WeatherIcon {
    let label = condition_text.to_lowercase();

    ICON_RULES
        .iter()
        .find(|rule| rule.matches(&label))
        .map(|rule| rule.icon)
        .unwrap_or(WeatherIcon::Sun)
}
