//! # quakereport
//!
//! Recent earthquakes from the USGS GeoJSON feed, in the terminal.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Parser → Presenter → UI
//! ```
//!
//! A background [`Loader`](fetcher::loader::Loader) runs fetch + parse off
//! the UI loop and hands each finished list over through a single slot.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the TUI
//! quakereport
//!
//! # Print the list once
//! quakereport list
//!
//! # Raw records as JSON, times in UTC
//! quakereport list --json --utc
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the fetcher,
/// parser and feed URL.
pub mod app;

/// Command-line interface using clap.
///
/// - `list [--json]` - Fetch once and print
/// - `tui` - Launch the TUI (default)
pub mod cli;

/// Configuration loaded from `~/.config/quakereport/config.toml`:
/// feed URL and timeouts, display time zone, colors, keybindings.
pub mod config;

/// The [`Earthquake`](domain::Earthquake) record.
pub mod domain;

/// HTTP fetching and the background loader.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait, empty string on failure
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`Loader`](fetcher::loader::Loader): One load at a time, latest result wins
pub mod fetcher;

/// USGS GeoJSON parsing.
pub mod parser;

/// Row formatting: magnitude buckets, location split, date and time.
pub mod presenter;

/// Terminal user interface built with ratatui.
///
/// Keybindings: j/k navigate, n/p page, Enter/o opens the USGS page in the
/// browser, R refreshes, q quits.
pub mod tui;
