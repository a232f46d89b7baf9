//! Client library for the Australian BOM Weather API
//! (<https://weather.bom.gov.au/>).
//!
//! This crate defines:
//! - Typed records for the API's JSON payloads (locations, observations,
//!   warnings, daily and three-hourly forecasts)
//! - A thin client over the API's GET endpoints with a typed error taxonomy
//! - Configuration for the `bom` CLI (saved default location)
//!
//! It is used by `bom-cli`, but can also be reused by other binaries or
//! services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{API_BASE_URL, Client, Location};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{
    Astronomical, DailyForecast, DailyForecastRain, DailyForecastUV, LocationInfo,
    LocationObservation, LocationResult, LocationWarning, ThreeHourlyForecast,
    ThreeHourlyForecastRain, Vector, WeatherStation,
};
