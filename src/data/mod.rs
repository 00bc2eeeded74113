//! Core data models for Tamil Nadu Weather CLI
//!
//! This module contains the data types used throughout the application
//! for representing districts and the raw forecast they resolve to.

pub mod district;
pub mod weather;

pub use district::{all_districts, resolve_district};
pub use weather::{weather_icon, ForecastClient, HourlySeries, WeatherError};

/// Represents a Tamil Nadu district with its forecast coordinates
///
/// Uses `&'static str` for the name to allow static initialization of
/// the DISTRICTS array. The name doubles as the search key and the
/// display name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct District {
    /// Human-readable district name, also the lookup key
    pub name: &'static str,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}
