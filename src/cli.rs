//! Command-line interface parsing for Tamil Nadu Weather CLI
//!
//! This module handles parsing of CLI arguments using clap, including the
//! optional DISTRICT argument that pre-submits a search on startup and the
//! --list flag for printing the district table without entering the TUI.

use clap::Parser;

/// Tamil Nadu Weather CLI - 3-day hourly forecasts for Tamil Nadu districts
#[derive(Parser, Debug)]
#[command(name = "tnweather")]
#[command(about = "Tamil Nadu district weather forecasts")]
#[command(version)]
pub struct Cli {
    /// District to search as soon as the app starts
    ///
    /// Examples:
    ///   tnweather              # Open with an empty search
    ///   tnweather chennai      # Open and fetch Chennai immediately
    ///
    /// An unknown name shows the in-app "District not found." error.
    #[arg(value_name = "DISTRICT")]
    pub district: Option<String>,

    /// List supported districts with their coordinates and exit
    #[arg(long)]
    pub list: bool,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Query to pre-fill and submit when the app starts
    pub initial_query: Option<String>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    pub fn from_cli(cli: &Cli) -> Self {
        StartupConfig {
            initial_query: cli.district.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["tnweather"]);
        assert!(cli.district.is_none());
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_parse_district_argument() {
        let cli = Cli::parse_from(["tnweather", "chennai"]);
        assert_eq!(cli.district.as_deref(), Some("chennai"));
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_parse_list_flag() {
        let cli = Cli::parse_from(["tnweather", "--list"]);
        assert!(cli.list);
        assert!(cli.district.is_none());
    }

    #[test]
    fn test_cli_parse_list_with_district() {
        // --list wins in main, but parsing accepts both together
        let cli = Cli::parse_from(["tnweather", "salem", "--list"]);
        assert!(cli.list);
        assert_eq!(cli.district.as_deref(), Some("salem"));
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert!(config.initial_query.is_none());
    }

    #[test]
    fn test_startup_config_from_cli_no_district() {
        let cli = Cli::parse_from(["tnweather"]);
        let config = StartupConfig::from_cli(&cli);
        assert!(config.initial_query.is_none());
    }

    #[test]
    fn test_startup_config_from_cli_with_district() {
        let cli = Cli::parse_from(["tnweather", "Madurai"]);
        let config = StartupConfig::from_cli(&cli);
        assert_eq!(config.initial_query.as_deref(), Some("Madurai"));
    }
}
