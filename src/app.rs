//! Application state management for Tamil Nadu Weather CLI
//!
//! This module contains the main application state, handling keyboard
//! input, search submission, and the transitions between the idle,
//! results, and error views.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::cli::StartupConfig;
use crate::data::{resolve_district, District, ForecastClient, WeatherError};
use crate::forecast::{group_by_date, DayForecast};

/// Message shown when the typed name matches no district
pub const DISTRICT_NOT_FOUND: &str = "District not found.";
/// Message shown when the forecast request or decode fails
pub const FETCH_FAILED: &str = "Failed to fetch weather.";

/// Application state enum representing the current view
///
/// Forecast data and the error message live inside their variants, so a
/// populated forecast and a set error can never coexist. Each search
/// replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// No search performed yet
    Idle,
    /// A successful search: district display name and its date buckets
    Results {
        district: &'static str,
        days: Vec<DayForecast>,
    },
    /// A failed search with its user-visible message
    Error(String),
}

/// A submitted search waiting for its forecast fetch
///
/// The sequence number is the request token: only the completion
/// carrying the latest issued token may change the app state, so an
/// older fetch resolving late cannot clobber a newer search.
#[derive(Debug, Clone, Copy)]
pub struct PendingSearch {
    /// Token issued for this search
    pub seq: u64,
    /// The resolved district to fetch
    pub district: &'static District,
}

/// Main application struct managing state and data
pub struct App {
    /// Current view state
    pub state: AppState,
    /// Live contents of the search input
    pub query: String,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show the help overlay
    pub show_help: bool,
    /// Scroll offset for the results view
    pub scroll_offset: u16,
    /// Search submitted but not yet fetched
    pending_search: Option<PendingSearch>,
    /// Latest issued search token
    search_seq: u64,
    /// Forecast API client
    forecast_client: ForecastClient,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new App instance in the idle state
    pub fn new() -> Self {
        Self {
            state: AppState::Idle,
            query: String::new(),
            should_quit: false,
            show_help: false,
            scroll_offset: 0,
            pending_search: None,
            search_seq: 0,
            forecast_client: ForecastClient::new(),
        }
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// A DISTRICT argument on the command line pre-fills the query and
    /// submits it, so the first loop iteration runs the fetch. An
    /// unknown name lands in the error state the same way a typed
    /// search would.
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let mut app = Self::new();

        if let Some(query) = config.initial_query {
            app.query = query;
            app.submit_search();
        }

        app
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Arguments
    /// * `key_event` - The keyboard event to handle
    ///
    /// # Key Bindings
    /// - printable characters / `Backspace`: edit the search input
    /// - `Enter`: submit the search
    /// - `Up`/`Down`: scroll the results
    /// - `?`: toggle the help overlay
    /// - `Esc`: close the overlay, else clear results/error, else quit
    /// - `Ctrl-C`: quit
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // The search input swallows plain letters, so quitting is
        // Esc-from-idle or Ctrl-C.
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            if key_event.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key_event.code {
            KeyCode::Esc => {
                if self.state == AppState::Idle {
                    self.should_quit = true;
                } else {
                    self.reset_to_idle();
                }
            }
            KeyCode::Enter => {
                self.submit_search();
            }
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Up => {
                self.scroll_up();
            }
            KeyCode::Down => {
                self.scroll_down();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char(c) => {
                self.query.push(c);
            }
            _ => {}
        }
    }

    /// Submits the current query as a search
    ///
    /// Resolves the district table first: a miss transitions straight to
    /// the error state; a hit records a pending search carrying a fresh
    /// token. Either way the token advances, so any fetch still in
    /// flight from an earlier submission becomes stale.
    pub fn submit_search(&mut self) {
        self.search_seq += 1;

        match resolve_district(&self.query) {
            Some(district) => {
                self.pending_search = Some(PendingSearch {
                    seq: self.search_seq,
                    district,
                });
            }
            None => {
                self.pending_search = None;
                self.scroll_offset = 0;
                self.state = AppState::Error(DISTRICT_NOT_FOUND.to_string());
            }
        }
    }

    /// Returns true if a submitted search still needs its fetch
    pub fn has_pending_search(&self) -> bool {
        self.pending_search.is_some()
    }

    /// Runs the pending search to completion, if there is one
    ///
    /// Fetches the forecast for the pending district, groups it by
    /// date, and applies the outcome through the token check.
    pub async fn run_pending_search(&mut self) {
        let Some(pending) = self.pending_search.take() else {
            return;
        };

        let result = self
            .forecast_client
            .fetch_forecast(pending.district.latitude, pending.district.longitude)
            .await
            .and_then(|series| group_by_date(&series));

        self.finish_search(pending.seq, pending.district.name, result);
    }

    /// Applies a search outcome if its token is still the latest
    ///
    /// A completion whose token is not the latest issued is dropped:
    /// the user has searched again since, and that newer search owns
    /// the state now.
    ///
    /// # Arguments
    /// * `seq` - The token issued when the search was submitted
    /// * `district` - Display name of the searched district
    /// * `result` - The grouped forecast, or the error that stopped it
    pub fn finish_search(
        &mut self,
        seq: u64,
        district: &'static str,
        result: Result<Vec<DayForecast>, WeatherError>,
    ) {
        if seq != self.search_seq {
            return;
        }

        self.scroll_offset = 0;
        self.state = match result {
            Ok(days) => AppState::Results { district, days },
            Err(_) => AppState::Error(FETCH_FAILED.to_string()),
        };
    }

    /// Clears results or error back to the idle state, keeping the query
    fn reset_to_idle(&mut self) {
        self.state = AppState::Idle;
        self.scroll_offset = 0;
    }

    /// Scrolls up in the results view, stopping at the top
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scrolls down in the results view
    ///
    /// The renderer clamps to actual content height; this only bounds
    /// the offset against runaway growth.
    pub fn scroll_down(&mut self) {
        const MAX_SCROLL: u16 = 300;
        if self.scroll_offset < MAX_SCROLL {
            self.scroll_offset += 1;
        }
    }
}
