use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use bom_core::{Client, Config, Location, LocationResult};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "bom", version, about = "Weather from the Australian Bureau of Meteorology")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for a weather location by name or postcode.
    Search {
        /// Location name, e.g. "Cordeaux Heights".
        query: String,
    },

    /// Pick a location from search results and save it as the default.
    SetLocation {
        /// Search term for the location to save.
        query: String,
    },

    /// Show metadata for a location.
    Info {
        /// Geohash override; defaults to the saved location.
        #[arg(long)]
        geohash: Option<String>,
    },

    /// Show current observations from the nearest station.
    Current {
        #[arg(long)]
        geohash: Option<String>,
    },

    /// Show the seven-day forecast.
    Daily {
        #[arg(long)]
        geohash: Option<String>,
    },

    /// Show the three-hourly forecast for the next two days.
    Hourly {
        #[arg(long)]
        geohash: Option<String>,
    },

    /// Show warnings covering a location.
    Warnings {
        #[arg(long)]
        geohash: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let client = Client::new();

        match self.command {
            Command::Search { query } => search(&client, &query).await,
            Command::SetLocation { query } => set_location(&client, &query).await,
            Command::Info { geohash } => info(&client, geohash).await,
            Command::Current { geohash } => current(&client, geohash).await,
            Command::Daily { geohash } => daily(&client, geohash).await,
            Command::Hourly { geohash } => hourly(&client, geohash).await,
            Command::Warnings { geohash } => warnings(&client, geohash).await,
        }
    }
}

/// Resolve the location to query: explicit `--geohash` wins, otherwise the
/// saved default from config.
fn resolve_location(client: &Client, geohash: Option<String>) -> Result<Location> {
    if let Some(geohash) = geohash {
        return Ok(Location::from_geohash(client, geohash));
    }

    let config = Config::load()?;
    match config.default_geohash() {
        Some(saved) => Ok(Location::from_geohash(client, saved)),
        None => bail!(
            "No location given and no default saved.\n\
             Hint: pass --geohash, or run `bom set-location <name>` first."
        ),
    }
}

fn describe(result: &LocationResult) -> String {
    format!(
        "{}, {} {}  [{}]",
        result.name.as_deref().unwrap_or("?"),
        result.state.as_deref().unwrap_or("?"),
        result.postcode.as_deref().unwrap_or("-"),
        result.geohash,
    )
}

fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

async fn search(client: &Client, query: &str) -> Result<()> {
    let results = client.search_locations(query).await?;

    if results.is_empty() {
        println!("No locations matched '{query}'.");
        return Ok(());
    }

    for result in &results {
        println!("{}", describe(result));
    }

    Ok(())
}

async fn set_location(client: &Client, query: &str) -> Result<()> {
    let results = client.search_locations(query).await?;

    let chosen = match results.len() {
        0 => bail!("No locations matched '{query}'."),
        1 => &results[0],
        _ => {
            let options: Vec<String> = results.iter().map(describe).collect();
            let picked = inquire::Select::new("Save which location?", options)
                .raw_prompt()
                .context("Selection cancelled")?;
            &results[picked.index]
        }
    };

    let name = chosen.name.clone().unwrap_or_else(|| chosen.geohash.clone());

    let mut config = Config::load()?;
    config.set_default_location(chosen.geohash.clone(), name.clone());
    config.save()?;

    println!("Saved default location: {} [{}]", name, chosen.geohash);
    Ok(())
}

async fn info(client: &Client, geohash: Option<String>) -> Result<()> {
    let location = resolve_location(client, geohash)?;
    let info = location.info().await?;

    println!("{} ({})", fmt_opt(info.name), fmt_opt(info.state));
    println!("  geohash:   {}", info.geohash);
    println!("  latitude:  {}", fmt_opt(info.latitude));
    println!("  longitude: {}", fmt_opt(info.longitude));
    println!("  timezone:  {}", fmt_opt(info.timezone));
    if info.has_wave == Some(true) {
        println!("  marine:    {}", fmt_opt(info.marine_area_id));
        println!("  tidal pt:  {}", fmt_opt(info.tidal_point));
    }

    Ok(())
}

async fn current(client: &Client, geohash: Option<String>) -> Result<()> {
    let location = resolve_location(client, geohash)?;
    let obs = location.observations().await?;

    println!(
        "Station: {} ({} km away)",
        fmt_opt(obs.station.name.as_deref()),
        fmt_opt(obs.station.distance)
    );
    println!(
        "  temp:        {} °C (feels like {})",
        fmt_opt(obs.temp),
        fmt_opt(obs.temp_feels_like)
    );
    println!("  humidity:    {} %", fmt_opt(obs.humidity));
    println!(
        "  wind:        {} {} km/h (gust {})",
        fmt_opt(obs.wind.direction.as_deref()),
        fmt_opt(obs.wind.speed),
        fmt_opt(obs.gust)
    );
    println!("  rain (9am):  {} mm", fmt_opt(obs.rain_since_9am));

    Ok(())
}

async fn daily(client: &Client, geohash: Option<String>) -> Result<()> {
    let location = resolve_location(client, geohash)?;
    let forecast = location.forecast_daily().await?;

    for day in &forecast {
        println!(
            "{}  {:>3}..{:<3} °C  rain {:>3} %  {}",
            fmt_opt(day.date.map(|d| d.format("%a %Y-%m-%d").to_string())),
            fmt_opt(day.temp_min),
            fmt_opt(day.temp_max),
            fmt_opt(day.rain.chance),
            fmt_opt(day.short_text.as_deref()),
        );
    }

    Ok(())
}

async fn hourly(client: &Client, geohash: Option<String>) -> Result<()> {
    let location = resolve_location(client, geohash)?;
    let forecast = location.forecast_3_hourly().await?;

    for slot in &forecast {
        println!(
            "{}  {:>3} °C  rain {:>3} %  wind {} {} km/h  {}",
            fmt_opt(slot.time.map(|t| t.format("%a %H:%M").to_string())),
            fmt_opt(slot.temp),
            fmt_opt(slot.rain.chance),
            fmt_opt(slot.wind.direction.as_deref()),
            fmt_opt(slot.wind.speed),
            fmt_opt(slot.icon.as_deref()),
        );
    }

    Ok(())
}

async fn warnings(client: &Client, geohash: Option<String>) -> Result<()> {
    let location = resolve_location(client, geohash)?;
    let warnings = location.warnings().await?;

    if warnings.is_empty() {
        println!("No warnings.");
        return Ok(());
    }

    for warning in &warnings {
        println!(
            "[{}] {}  (expires {})",
            fmt_opt(warning.phase.as_deref()),
            fmt_opt(warning.title.as_deref()),
            fmt_opt(warning.expiry_time.map(|t| t.to_rfc3339())),
        );
    }

    Ok(())
}
