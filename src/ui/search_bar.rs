//! Search bar rendering
//!
//! Renders the application title, the district search input, and the
//! status line underneath it: an idle hint, the results header, or the
//! error message of the last failed search.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, AppState};

/// Renders the title, search input, and status line into `area`
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new("Tamil Nadu Weather Forecast")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // The trailing bar marks the insertion point
    let input = Paragraph::new(Line::from(vec![
        Span::raw(app.query.as_str()),
        Span::styled("▏", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .title(" District ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input, chunks[1]);

    frame.render_widget(status_line(app), chunks[2]);
}

/// Builds the status line for the current state
fn status_line(app: &App) -> Paragraph<'_> {
    let line = match &app.state {
        AppState::Idle => Line::from(Span::styled(
            "Type a district name and press Enter · ? for help",
            Style::default().fg(Color::DarkGray),
        )),
        AppState::Results { district, .. } => Line::from(Span::styled(
            format!("{} – 3-Day Hourly Forecast", district),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        AppState::Error(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
    };

    Paragraph::new(line).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::app::DISTRICT_NOT_FOUND;

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_idle_shows_title_and_hint() {
        let app = App::new();
        let content = render_to_string(&app);

        assert!(content.contains("Tamil Nadu Weather Forecast"));
        assert!(content.contains("District"));
        assert!(content.contains("press Enter"));
    }

    #[test]
    fn test_query_text_is_echoed() {
        let mut app = App::new();
        app.query = "chenn".to_string();

        let content = render_to_string(&app);

        assert!(content.contains("chenn"));
    }

    #[test]
    fn test_error_state_shows_message() {
        let mut app = App::new();
        app.query = "Atlantis".to_string();
        app.submit_search();

        let content = render_to_string(&app);

        assert!(content.contains(DISTRICT_NOT_FOUND));
    }

    #[test]
    fn test_results_state_shows_forecast_header() {
        let mut app = App::new();
        app.state = AppState::Results {
            district: "Chennai",
            days: Vec::new(),
        };

        let content = render_to_string(&app);

        assert!(content.contains("Chennai – 3-Day Hourly Forecast"));
    }
}
