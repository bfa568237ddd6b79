//! Domain records produced by the mappers and consumed by the renderers.
//!
//! Every record is built fresh from one provider response and never mutated
//! afterwards.

pub mod fixture;
pub mod league;
pub mod lineup;
pub mod performer;
pub mod squad;
pub mod standing;
pub mod statistics;

pub use fixture::{LeagueRef, Match, MatchStatus, Outcome, Score, ScorePair, TeamRef};
pub use league::{League, Team};
pub use lineup::{Lineup, LineupPlayer, LineupRole, LineupRow, TeamLineup};
pub use performer::{TopMetric, TopPerformer};
pub use squad::{PositionGroup, Squad, SquadPlayer};
pub use standing::{Record, Standing, StandingRow};
pub use statistics::{
    MetricRow, Split, StatRow, StatValue, Statistics, Streaks, TeamMatchStats, TeamSeasonStats,
};
