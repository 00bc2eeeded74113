//! Forecast results rendering
//!
//! Renders the date-grouped hourly cards: one header line per calendar
//! date, followed by a row per hour showing the display time, the
//! weather icon, the temperature, and the raw WMO code.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, AppState};
use crate::data::weather_icon;
use crate::forecast::{DayForecast, HourlySample};

/// Color for temperature (warmer = more red, cooler = more blue)
fn temperature_color(temp: f64) -> Color {
    if temp >= 35.0 {
        Color::Red
    } else if temp >= 30.0 {
        Color::LightRed
    } else if temp >= 25.0 {
        Color::Yellow
    } else if temp >= 20.0 {
        Color::Green
    } else if temp >= 15.0 {
        Color::Cyan
    } else {
        Color::Blue
    }
}

/// Renders the results area into `area`
///
/// Draws nothing unless the app holds results. The scroll offset is
/// clamped against the content height so scrolling past the end shows
/// the last page rather than a blank screen.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let AppState::Results { days, .. } = &app.state else {
        return;
    };

    let lines = forecast_lines(days);

    let max_scroll = (lines.len() as u16).saturating_sub(area.height);
    let offset = app.scroll_offset.min(max_scroll);

    let paragraph = Paragraph::new(lines).scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// Builds the full list of result lines, one day section after another
fn forecast_lines(days: &[DayForecast]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for day in days {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            day.date.format("%A, %-d %B %Y").to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));

        for hour in &day.hours {
            lines.push(hour_line(hour));
        }
    }

    lines
}

/// Builds one hour card row: time, icon, temperature, raw code
fn hour_line(hour: &HourlySample) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:>8}  ", hour.display_time),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(format!("{}  ", weather_icon(hour.weather_code))),
        Span::styled(
            format!("{:>5.1}°C", hour.temperature),
            Style::default().fg(temperature_color(hour.temperature)),
        ),
        Span::styled(
            format!("   Code: {}", hour.weather_code),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
