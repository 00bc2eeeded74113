//! Forecast grouping and time formatting
//!
//! Converts the parallel hourly arrays returned by Open-Meteo into
//! date-keyed buckets of display-ready samples. Buckets appear in
//! first-occurrence order of the source timestamps; samples within a
//! bucket keep source order, which is chronological.

use chrono::{NaiveDate, NaiveDateTime};

use crate::data::{HourlySeries, WeatherError};

/// One display-ready hourly forecast entry
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    /// 12-hour display string, e.g. "1:00 AM"
    pub display_time: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// WMO weather code
    pub weather_code: u16,
}

/// All hourly samples falling on one calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    /// The calendar date of every sample in `hours`
    pub date: NaiveDate,
    /// Samples in source (chronological) order
    pub hours: Vec<HourlySample>,
}

/// Group the parallel hourly arrays into per-date buckets
///
/// Validates that the three arrays are equal length and non-empty, then
/// walks them index-by-index in source order. Each sample lands in the
/// bucket for the calendar date of its timestamp; a bucket is created on
/// first encounter, so bucket order follows the first occurrence of each
/// date in the source.
///
/// # Arguments
/// * `series` - The raw hourly arrays from the API
///
/// # Returns
/// * `Ok(Vec<DayForecast>)` - Date buckets in first-occurrence order
/// * `Err(WeatherError)` - On length mismatch, empty arrays, or an
///   unparseable timestamp
pub fn group_by_date(series: &HourlySeries) -> Result<Vec<DayForecast>, WeatherError> {
    let len = series.time.len();

    if series.temperature_2m.len() != len || series.weathercode.len() != len {
        return Err(WeatherError::MalformedResponse(
            "hourly arrays have inconsistent lengths".to_string(),
        ));
    }
    if len == 0 {
        return Err(WeatherError::MalformedResponse(
            "hourly arrays are empty".to_string(),
        ));
    }

    let mut days: Vec<DayForecast> = Vec::new();

    for i in 0..len {
        let time = parse_datetime(&series.time[i])?;
        let date = time.date();
        let sample = HourlySample {
            display_time: format_am_pm(time),
            temperature: series.temperature_2m[i],
            weather_code: series.weathercode[i],
        };

        match days.iter_mut().find(|day| day.date == date) {
            Some(day) => day.hours.push(sample),
            None => days.push(DayForecast {
                date,
                hours: vec![sample],
            }),
        }
    }

    Ok(days)
}

/// Format a timestamp as a 12-hour clock display string
///
/// Hours 0 and 12 both display as "12"; minutes are zero-padded; the
/// suffix is "AM" for hours before noon and "PM" from noon onward.
/// Midnight is "12:00 AM", noon is "12:00 PM".
pub fn format_am_pm(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Parse a datetime string in ISO 8601 format (e.g., "2024-01-01T05:00") to NaiveDateTime
fn parse_datetime(datetime_str: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M")
        .map_err(|_| WeatherError::InvalidTimeFormat(datetime_str.to_string()))
}
