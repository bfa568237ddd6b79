use crate::cli::types::{Season, StandingsFilter};

use super::{LeagueRef, TeamRef};

/// Played/won/drawn/lost and goals for one slice of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Record {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl Record {
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub rank: u32,
    pub team: TeamRef,
    pub points: i32,
    /// Recent results, most recent last, e.g. "WWDLW".
    pub form: Option<String>,
    pub description: Option<String>,
    pub all: Record,
    pub home: Option<Record>,
    pub away: Option<Record>,
}

impl StandingRow {
    /// Record for the requested split; `None` when the provider omitted it.
    pub fn record(&self, filter: StandingsFilter) -> Option<&Record> {
        match filter {
            StandingsFilter::All => Some(&self.all),
            StandingsFilter::Home => self.home.as_ref(),
            StandingsFilter::Away => self.away.as_ref(),
        }
    }
}

/// One league table. Competitions with groups produce one table per group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub league: LeagueRef,
    pub season: Season,
    pub group: Option<String>,
    /// Sorted by rank ascending.
    pub rows: Vec<StandingRow>,
}

impl Standing {
    pub fn new(
        league: LeagueRef,
        season: Season,
        group: Option<String>,
        mut rows: Vec<StandingRow>,
    ) -> Self {
        rows.sort_by_key(|r| r.rank);
        Self {
            league,
            season,
            group,
            rows,
        }
    }
}
