//! Tamil Nadu Weather CLI - 3-day hourly district forecasts
//!
//! A terminal UI application that looks up a Tamil Nadu district by
//! name, fetches its 3-day hourly forecast from Open-Meteo, and shows
//! the hours grouped by calendar date.

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use tnweather::app::App;
use tnweather::cli::{Cli, StartupConfig};
use tnweather::data::all_districts;
use tnweather::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI: search bar on top, results underneath, help on demand
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ui::SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
        ])
        .split(frame.area());

    ui::render_search_bar(frame, app, chunks[0]);
    ui::render_forecast(frame, app, chunks[1]);

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// Prints the district table for the --list flag
fn print_district_list() {
    for district in all_districts() {
        println!(
            "{}: ({}, {})",
            district.name, district.latitude, district.longitude
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list {
        print_district_list();
        return Ok(());
    }

    let config = StartupConfig::from_cli(&cli);

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance, submitting the startup search if one was given
    let mut app = App::with_startup_config(config);

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // A submitted search runs its single fetch to completion before
        // input is polled again
        if app.has_pending_search() {
            app.run_pending_search().await;
            continue;
        }

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
