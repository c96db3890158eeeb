//! Maps provider condition labels onto a fixed set of categories.
//!
//! Labels are free text ("Patchy light drizzle", "Partly cloudy", ...) and often
//! contain several keywords, so matching walks [`RULES`] in order and the first
//! rule with a matching keyword wins.

use serde::{Deserialize, Serialize};

/// First and last hour (inclusive) treated as daytime.
pub const DAY_START_HOUR: u32 = 6;
pub const DAY_END_HOUR: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    ClearDay,
    ClearNight,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Overcast,
    Rain,
    Snow,
    Storm,
    Mist,
    Unknown,
}

impl ConditionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClearDay => "clear-day",
            Self::ClearNight => "clear-night",
            Self::PartlyCloudyDay => "partly-cloudy-day",
            Self::PartlyCloudyNight => "partly-cloudy-night",
            Self::Overcast => "overcast",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Storm => "storm",
            Self::Mist => "mist",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a matching rule resolves to.
#[derive(Debug, Clone, Copy)]
enum Outcome {
    Fixed(ConditionCategory),
    /// Day variant between the day hours, night variant otherwise.
    ByHour { day: ConditionCategory, night: ConditionCategory },
}

#[derive(Debug)]
struct Rule {
    keywords: &'static [&'static str],
    outcome: Outcome,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["sunny", "clear"],
        outcome: Outcome::ByHour {
            day: ConditionCategory::ClearDay,
            night: ConditionCategory::ClearNight,
        },
    },
    Rule {
        keywords: &["partly cloudy", "partly sunny"],
        outcome: Outcome::ByHour {
            day: ConditionCategory::PartlyCloudyDay,
            night: ConditionCategory::PartlyCloudyNight,
        },
    },
    Rule {
        keywords: &["overcast", "cloudy"],
        outcome: Outcome::Fixed(ConditionCategory::Overcast),
    },
    Rule {
        keywords: &["rain", "drizzle"],
        outcome: Outcome::Fixed(ConditionCategory::Rain),
    },
    Rule {
        keywords: &["snow"],
        outcome: Outcome::Fixed(ConditionCategory::Snow),
    },
    Rule {
        keywords: &["thunder", "storm"],
        outcome: Outcome::Fixed(ConditionCategory::Storm),
    },
    Rule {
        keywords: &["mist", "fog"],
        outcome: Outcome::Fixed(ConditionCategory::Mist),
    },
];

pub fn is_daytime(local_hour: u32) -> bool {
    (DAY_START_HOUR..=DAY_END_HOUR).contains(&local_hour)
}

pub fn classify(condition_text: &str, local_hour: u32) -> ConditionCategory {
    let label = condition_text.to_lowercase();

    let Some(rule) = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| label.contains(kw)))
    else {
        return ConditionCategory::Unknown;
    };

    match rule.outcome {
        Outcome::Fixed(category) => category,
        Outcome::ByHour { day, night } => {
            if is_daytime(local_hour) {
                day
            } else {
                night
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ConditionCategory::*;

    #[test]
    fn partly_cloudy_never_falls_through_to_overcast() {
        for label in ["Partly cloudy", "PARTLY CLOUDY", "partly cloudy skies", "Partly Cloudy "] {
            assert_eq!(classify(label, 14), PartlyCloudyDay, "{label}");
            assert_eq!(classify(label, 2), PartlyCloudyNight, "{label}");
        }
    }

    #[test]
    fn day_window_is_inclusive_at_both_ends() {
        assert_eq!(classify("Sunny", 6), ClearDay);
        assert_eq!(classify("Sunny", 18), ClearDay);
        assert_eq!(classify("Clear", 5), ClearNight);
        assert_eq!(classify("Clear", 19), ClearNight);
        assert_eq!(classify("Clear", 0), ClearNight);
        assert_eq!(classify("Partly cloudy", 5), PartlyCloudyNight);
        assert_eq!(classify("Partly cloudy", 6), PartlyCloudyDay);
    }

    #[test]
    fn unrecognised_labels_degrade_to_unknown() {
        assert_eq!(classify("", 12), Unknown);
        assert_eq!(classify("some unrecognized string", 12), Unknown);
        assert_eq!(classify("Blizzard", 3), Unknown);
    }

    #[test]
    fn provider_labels_land_in_expected_categories() {
        let cases = [
            ("Cloudy", Overcast),
            ("Overcast", Overcast),
            ("Patchy rain nearby", Rain),
            ("Light drizzle", Rain),
            ("Moderate snow", Snow),
            ("Thundery outbreaks possible", Storm),
            ("Freezing fog", Mist),
            ("Mist", Mist),
        ];

        for (label, expected) in cases {
            assert_eq!(classify(label, 12), expected, "{label}");
        }
    }

    #[test]
    fn earlier_rules_win_when_keywords_overlap() {
        // "rain" is checked before "thunder".
        assert_eq!(classify("Patchy light rain with thunder", 12), Rain);
        // "sunny" is checked before "partly sunny".
        assert_eq!(classify("Partly sunny", 12), ClearDay);
        // "rain" before "snow".
        assert_eq!(classify("Light sleet showers of rain and snow", 12), Rain);
    }

    #[test]
    fn hour_does_not_affect_fixed_categories() {
        for hour in 0..24 {
            assert_eq!(classify("Heavy rain", hour), Rain);
        }
    }
}
