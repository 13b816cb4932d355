//! Decoded shape of one city's current-weather reading.
//!
//! Mirrors the OpenWeatherMap current-weather response. Fields the upstream
//! omits decode to their defaults, so a sparse body (no rain, no gust) is
//! still a valid record. Records are built once per successful fetch and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One city's current weather as returned by the upstream provider
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherRecord {
    pub coord: Coord,
    pub weather: Vec<Condition>,
    /// Internal upstream parameter
    pub base: String,
    pub main: MainMetrics,
    /// Visibility distance in meters
    pub visibility: i64,
    pub wind: Wind,
    pub rain: Rain,
    pub clouds: Clouds,
    /// Observation time (unix timestamp)
    pub dt: i64,
    pub sys: SysInfo,
    /// Shift in seconds from UTC
    pub timezone: i64,
    /// City identifier
    pub id: i64,
    /// City name
    pub name: String,
    /// Upstream status code embedded in the body
    pub cod: i64,
}

/// Coordinates of the city
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

/// One weather-condition descriptor (e.g. Rain, Clouds)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Core metrics block: temperatures, pressure, humidity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MainMetrics {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub humidity: i64,
    pub sea_level: i64,
    pub grnd_level: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Wind {
    pub speed: f64,
    pub deg: i64,
    pub gust: f64,
}

/// Rain volume over the last hour, when reported
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rain {
    #[serde(rename = "1h")]
    pub one_h: f64,
}

/// Cloudiness percentage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Clouds {
    pub all: i64,
}

/// Country, sunrise/sunset and internal upstream parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SysInfo {
    #[serde(rename = "type")]
    pub type_: i64,
    pub id: i64,
    pub country: String,
    /// Sunrise time (unix timestamp)
    pub sunrise: i64,
    /// Sunset time (unix timestamp)
    pub sunset: i64,
}
