//! Open-Meteo forecast API client
//!
//! This module provides functionality to fetch the 3-day hourly forecast
//! from the Open-Meteo API and the WMO weather code to icon mapping used
//! when the forecast is rendered.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Base URL for the Open-Meteo API
const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Errors that can occur when fetching or decoding forecast data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Response decoded but its contents are unusable
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid time format in response
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
}

/// Hourly forecast arrays as returned by Open-Meteo
///
/// The three arrays are parallel: index i of each describes the same
/// hour. `time` entries are ISO 8601 local timestamps in the requested
/// timezone, ordered chronologically ascending.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub weathercode: Vec<u16>,
}

/// Open-Meteo API response structure
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    hourly: HourlySeries,
}

/// Client for fetching forecast data from the Open-Meteo API
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    /// Create a new ForecastClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new ForecastClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the 3-day hourly forecast for the given coordinates
    ///
    /// Issues a single GET requesting hourly temperature and weather
    /// code over a 3-day horizon, with timestamps in the location's own
    /// timezone (`timezone=auto`). No retry is performed.
    ///
    /// # Arguments
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    ///
    /// # Returns
    /// * `Ok(HourlySeries)` - The parallel hourly arrays
    /// * `Err(WeatherError)` - If the request or parsing fails
    pub async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<HourlySeries, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&hourly=temperature_2m,weathercode&forecast_days=3&timezone=auto",
            OPEN_METEO_BASE_URL, lat, lon
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let text = response.text().await?;
        let api_response: OpenMeteoResponse = serde_json::from_str(&text)?;

        Ok(api_response.hourly)
    }
}

/// Map a WMO weather code to its display glyph
///
/// Weather codes from WMO (World Meteorological Organization):
/// - 0: Clear sky
/// - 1-3: Mainly clear, partly cloudy, overcast
/// - 45, 48: Fog
/// - 51-55: Drizzle
/// - 61-65: Rain
/// - 71-75: Snow
/// - 95-99: Thunderstorm
///
/// Codes not present in the table yield the "❓" fallback. Total
/// function, never fails.
pub fn weather_icon(code: u16) -> &'static str {
    match code {
        0 => "☀️",
        1 => "🌤️",
        2 => "⛅",
        3 => "☁️",
        45 | 48 => "🌫️",
        51 | 53 | 55 => "🌦️",
        61 | 63 | 65 => "🌧️",
        71 | 73 | 75 => "🌨️",
        95 | 96 | 99 => "⛈️",
        _ => "❓",
    }
}
