use anyhow::{Context, anyhow};
use chrono::Local;
use clap::{Parser, Subcommand};
use dashboard_core::{Config, Dashboard, DashboardView, SearchOutcome, provider_from_config};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard for the terminal")]
pub struct Cli {
    /// weatherapi.com API key; overrides the configured one.
    #[arg(long, global = true, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default location.
    Configure,

    /// Fetch and print the dashboard once.
    Show {
        /// Place to look up; defaults to the configured location.
        location: Option<String>,
    },

    /// Interactive dashboard: type a place to search, `:r` to refresh, `:q` to quit.
    Dashboard,
}

/// What the user typed at the dashboard prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Refresh,
    Search(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim() {
            ":q" | ":quit" => Self::Quit,
            ":r" | ":refresh" => Self::Refresh,
            _ => Self::Search(line.to_string()),
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location } => show(self.api_key.as_deref(), location).await,
            Command::Dashboard => interactive(self.api_key.as_deref()).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("weatherapi.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        return Err(anyhow!("API key must not be empty"));
    }
    config.set_api_key(api_key);

    let location = Text::new("Default location:")
        .with_default(config.default_location())
        .prompt()
        .context("Failed to read default location")?;
    config.set_default_location(&location);

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

fn build_dashboard(api_key: Option<&str>, location: Option<&str>) -> anyhow::Result<Dashboard> {
    let config = Config::load()?;
    let provider = provider_from_config(&config, api_key)?;
    let location = location.unwrap_or(config.default_location());

    Ok(Dashboard::with_default_location(provider, location))
}

fn draw(dashboard: &Dashboard) {
    let today = dashboard
        .state()
        .snapshot()
        .map(|s| s.location.local_time.date())
        .unwrap_or_else(|| Local::now().date_naive());

    let view = DashboardView::build(dashboard.state(), today);
    println!("{}", render::render(&view));
}

async fn show(api_key: Option<&str>, location: Option<String>) -> anyhow::Result<()> {
    let mut dashboard = build_dashboard(api_key, location.as_deref())?;

    let outcome = dashboard.start().await;
    draw(&dashboard);

    match outcome {
        SearchOutcome::Ready => Ok(()),
        SearchOutcome::Ignored => Err(anyhow!("No location given")),
        _ => Err(anyhow!("Could not load weather for '{}'", dashboard.state().location_query())),
    }
}

async fn interactive(api_key: Option<&str>) -> anyhow::Result<()> {
    let mut dashboard = build_dashboard(api_key, None)?;

    println!("Loading weather data...");
    dashboard.start().await;
    draw(&dashboard);

    loop {
        let line = match tokio::task::spawn_blocking(prompt_line).await? {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read search input"),
        };

        let outcome = match Input::parse(&line) {
            Input::Quit => break,
            Input::Refresh => dashboard.refresh().await,
            Input::Search(query) => {
                dashboard.set_search_input(&query);
                dashboard.submit().await
            }
        };

        debug!(?outcome, "prompt handled");
        if outcome != SearchOutcome::Ignored {
            draw(&dashboard);
        }
    }

    Ok(())
}

fn prompt_line() -> Result<String, InquireError> {
    Text::new("Search for a city...")
        .with_help_message(":r refresh, :q quit")
        .prompt()
}
