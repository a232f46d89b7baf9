use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Km/h per knot; the API reports wind speeds in km/h.
const KPH_TO_KNOTS: f64 = 1.852;

/// Parse an API timestamp (ISO-8601 with a trailing `Z`).
///
/// `None` and the empty string both mean "not supplied" and map to `None`;
/// they show up routinely in warning and UV payloads.
fn parse_date(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, chrono::ParseError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))),
    }
}

fn de_timestamp<'de, D>(de: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    parse_date(raw.as_deref()).map_err(serde::de::Error::custom)
}

/// One hit from a location search.
///
/// The `geohash` is the location's primary key; every other lookup is made
/// against it. It is required — a search hit without one is unusable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationResult {
    pub id: Option<String>,
    pub geohash: String,
    pub state: Option<String>,
    pub name: Option<String>,
    pub postcode: Option<String>,
}

/// Full metadata for one geohash.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationInfo {
    pub id: Option<String>,
    pub geohash: String,
    pub state: Option<String>,
    pub name: Option<String>,
    pub has_wave: Option<bool>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub marine_area_id: Option<String>,
    pub tidal_point: Option<String>,
    pub timezone: Option<String>,
}

/// An active or historical warning for a location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationWarning {
    pub id: Option<String>,
    pub geohash: String,
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub warning_type: Option<String>,
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub phase: Option<String>,
    pub warning_group_type: Option<String>,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub issue_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub expiry_time: Option<DateTime<Utc>>,
}

/// Wind direction and speed in km/h.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vector {
    pub direction: Option<String>,
    #[serde(rename = "speed_kilometre")]
    pub speed: Option<i64>,
}

impl Vector {
    /// Speed converted to knots.
    pub fn speed_knots(&self) -> Option<f64> {
        self.speed.map(|s| s as f64 / KPH_TO_KNOTS)
    }
}

/// The observing station a reading came from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherStation {
    pub bom_id: Option<String>,
    pub name: Option<String>,
    pub distance: Option<i64>,
}

/// Sun rise and set times.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Astronomical {
    #[serde(default, deserialize_with = "de_timestamp", rename = "sunrise_time")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_timestamp", rename = "sunset_time")]
    pub sunset: Option<DateTime<Utc>>,
}

/// Current conditions at the nearest station.
///
/// The station and wind sub-objects are required; a payload without them
/// fails to decode. Scalar readings the station did not report are `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationObservation {
    pub gust: Option<i64>,
    pub humidity: Option<i64>,
    pub rain_since_9am: Option<f64>,
    pub station: WeatherStation,
    pub temp: Option<f64>,
    pub temp_feels_like: Option<f64>,
    pub wind: Vector,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RainAmount {
    min: Option<f64>,
    max: Option<f64>,
    units: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DailyRainWire {
    #[serde(default)]
    amount: RainAmount,
    chance: Option<i64>,
    precipitation_amount_25_percent_chance: Option<f64>,
    precipitation_amount_50_percent_chance: Option<f64>,
    precipitation_amount_75_percent_chance: Option<f64>,
}

/// Rain outlook for one day, flattened from the nested `amount` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "DailyRainWire")]
pub struct DailyForecastRain {
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub units: Option<String>,
    pub chance: Option<i64>,
    pub percent_chance_25: Option<f64>,
    pub percent_chance_50: Option<f64>,
    pub percent_chance_75: Option<f64>,
}

impl From<DailyRainWire> for DailyForecastRain {
    fn from(wire: DailyRainWire) -> Self {
        Self {
            min_amount: wire.amount.min,
            max_amount: wire.amount.max,
            units: wire.amount.units,
            chance: wire.chance,
            percent_chance_25: wire.precipitation_amount_25_percent_chance,
            percent_chance_50: wire.precipitation_amount_50_percent_chance,
            percent_chance_75: wire.precipitation_amount_75_percent_chance,
        }
    }
}

/// UV outlook for one day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyForecastUV {
    pub category: Option<String>,
    pub max_index: Option<i64>,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub end_time: Option<DateTime<Utc>>,
}

/// One day of the seven-day forecast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyForecast {
    #[serde(default, deserialize_with = "de_timestamp")]
    pub date: Option<DateTime<Utc>>,
    pub temp_min: Option<i64>,
    pub temp_max: Option<i64>,
    pub short_text: Option<String>,
    pub extended_text: Option<String>,
    #[serde(rename = "icon_descriptor")]
    pub icon: Option<String>,
    pub fire_danger: Option<String>,
    pub rain: DailyForecastRain,
    pub astronomical: Astronomical,
    pub uv: DailyForecastUV,
}

#[derive(Debug, Deserialize)]
struct ThreeHourlyRainWire {
    #[serde(default)]
    amount: RainAmount,
    chance: Option<i64>,
}

/// Rain outlook for one three-hour slot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ThreeHourlyRainWire")]
pub struct ThreeHourlyForecastRain {
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub units: Option<String>,
    pub chance: Option<i64>,
}

impl From<ThreeHourlyRainWire> for ThreeHourlyForecastRain {
    fn from(wire: ThreeHourlyRainWire) -> Self {
        Self {
            min_amount: wire.amount.min,
            max_amount: wire.amount.max,
            units: wire.amount.units,
            chance: wire.chance,
        }
    }
}

/// One slot of the two-day, three-hourly forecast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThreeHourlyForecast {
    #[serde(default, deserialize_with = "de_timestamp")]
    pub time: Option<DateTime<Utc>>,
    pub is_night: Option<bool>,
    #[serde(default, deserialize_with = "de_timestamp", rename = "next_forecast_period")]
    pub next_forecast: Option<DateTime<Utc>>,
    pub temp: Option<i64>,
    #[serde(rename = "icon_descriptor")]
    pub icon: Option<String>,
    pub rain: ThreeHourlyForecastRain,
    pub wind: Vector,
}
