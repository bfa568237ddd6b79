//! Type-safe wrappers and enums for command-line values.

pub mod filters;
pub mod ids;
pub mod time;

pub use filters::{CardType, OutputFormat, StandingsFilter};
pub use ids::{FixtureId, LeagueId, PlayerId, TeamId};
pub use time::{MatchDate, Season};
