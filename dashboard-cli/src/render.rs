use std::fmt::Write;

use dashboard_core::DashboardView;

const RULE: &str = "────────────────────────────────────────────";

/// Plain-text rendering of the dashboard.
pub fn render(view: &DashboardView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &DashboardView) -> std::fmt::Result {
    writeln!(out, "Weather Dashboard")?;
    write!(out, "theme: {}", view.presentation.background)?;
    if let Some(particles) = &view.presentation.particles {
        write!(out, " · {}", particles.describe())?;
    }
    writeln!(out)?;

    if let Some(updated) = &view.last_updated {
        writeln!(out, "Updated: {updated}")?;
    }

    if view.loading {
        writeln!(out, "\nLoading weather data...")?;
    }

    if let Some(error) = &view.error {
        writeln!(out, "\nOops! Something went wrong")?;
        writeln!(out, "{error}")?;
    }

    let (Some(header), Some(current)) = (&view.header, &view.current) else {
        return Ok(());
    };

    writeln!(out, "{RULE}")?;
    writeln!(out, "{}, {}    {} {}", header.name, header.country, header.local_date, header.local_time)?;
    writeln!(out)?;
    writeln!(out, "  {}  {}°  {}", current.icon.glyph(), current.temperature, current.condition)?;
    writeln!(out, "  H: {}°  L: {}°", current.high, current.low)?;
    writeln!(out, "  Sunrise {}   Sunset {}", current.sunrise, current.sunset)?;

    writeln!(out, "{RULE}")?;
    writeln!(out, "Hourly Forecast")?;
    for slot in &view.hourly {
        write!(out, "  {:>5}  {:<2} {:>3}°", slot.label, slot.icon.glyph(), slot.temperature)?;
        if let Some(rain) = slot.rain_chance_pct {
            write!(out, "  {rain}% rain")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{RULE}")?;
    writeln!(out, "Weather Details")?;
    writeln!(out, "  Wind Speed   {} km/h", current.wind_kph)?;
    writeln!(out, "  Humidity     {}%", current.humidity_pct)?;
    writeln!(out, "  Visibility   {} km", current.visibility_km)?;
    writeln!(out, "  Feels like   {}°", current.feels_like)?;

    writeln!(out, "{RULE}")?;
    writeln!(out, "7-Day Forecast")?;
    for day in &view.daily {
        writeln!(
            out,
            "  {:<18} {:<2} {:<28} {:>3}% {:>4} km/h  {:>3}° / {:>3}°",
            day.label,
            day.icon.glyph(),
            day.condition,
            day.rain_chance_pct,
            day.wind_kph,
            day.high,
            day.low,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dashboard_core::DashboardState;

    #[test]
    fn empty_dashboard_has_title_and_default_theme() {
        let view = DashboardView::build(
            &DashboardState::default(),
            NaiveDate::from_ymd_opt(2025, 6, 8).expect("date"),
        );
        let text = render(&view);

        assert!(text.starts_with("Weather Dashboard"));
        assert!(text.contains("theme: default (blue-400 → blue-500 → blue-600)"));
        assert!(!text.contains("Hourly Forecast"));
    }
}
