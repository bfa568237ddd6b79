//! Sporty: football scores from the command line
//!
//! A Rust library and CLI over the API-Football v3 REST API, providing match
//! scores, live scores, fixture statistics and line-ups, squads, team
//! history and season statistics, and league standings.
//!
//! ## Features
//!
//! - **Match Scores**: Filter fixtures by league, team, country, date or season
//! - **Live Scores**: Matches in progress with elapsed minutes
//! - **Fixture Details**: Per-team statistics and line-ups for one fixture
//! - **Teams**: Squads, recent results and season aggregates
//! - **Standings**: League tables with home/away splits, lookup by name
//! - **Leaderboards**: Top scorers, assists and bookings per league season
//! - **Table or Detailed Output**: Aligned plain-text tables or per-record blocks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sporty::{
//!     commands::{handle_match_scores, MatchQueryParams},
//!     config::{Config, Defaults},
//!     football::ApiClient,
//!     LeagueId,
//! };
//!
//! # async fn example() -> sporty::Result<()> {
//! let config = Config::load_with_env(&sporty::config::default_config_path());
//! let api = ApiClient::from_config(&config)?;
//! let defaults = Defaults::from_config(&config, chrono::Local::now().date_naive());
//!
//! let params = MatchQueryParams {
//!     league: Some(LeagueId::new(39)),
//!     live: true,
//!     ..MatchQueryParams::default()
//! };
//! println!("{}", handle_match_scores(&api, &defaults, params).await?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your API-Football key to avoid storing it in the config file:
//! ```bash
//! export SPORTY_API_KEY=your-key
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod football;
pub mod logging;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use cli::types::{FixtureId, LeagueId, MatchDate, PlayerId, Season, TeamId};
pub use error::{Result, SportyError};

pub const API_KEY_ENV_VAR: &str = "SPORTY_API_KEY";
pub const BASE_URL_ENV_VAR: &str = "SPORTY_BASE_URL";
