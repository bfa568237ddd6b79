//! Per-fixture team statistics and season aggregates for a team.

use std::fmt;

use crate::cli::types::{FixtureId, Season};

use super::{LeagueRef, TeamRef};

/// A statistic value as the provider reports it: a count, a percentage
/// string ("55%"), a decimal string ("1.42"), or null.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Count(i64),
    Percent(f64),
    Decimal(f64),
    Missing,
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{}", n),
            StatValue::Percent(p) => write!(f, "{}%", p),
            StatValue::Decimal(d) => write!(f, "{:.2}", d),
            StatValue::Missing => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMatchStats {
    pub team: TeamRef,
    /// Statistic name to value, in provider order.
    pub values: Vec<(String, StatValue)>,
}

impl TeamMatchStats {
    pub fn get(&self, name: &str) -> Option<&StatValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

/// Statistics for both teams of one fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub fixture: FixtureId,
    pub teams: Vec<TeamMatchStats>,
}

/// One statistic compared across the teams of a fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow<'a> {
    pub name: &'a str,
    pub team_names: Vec<&'a str>,
    pub values: Vec<&'a StatValue>,
}

impl Statistics {
    /// One row per statistic name, in order of first appearance. Teams that
    /// did not report a statistic show it as missing.
    pub fn rows(&self) -> Vec<StatRow<'_>> {
        let mut names: Vec<&str> = Vec::new();
        for team in &self.teams {
            for (name, _) in &team.values {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        let team_names: Vec<&str> = self.teams.iter().map(|t| t.team.name.as_str()).collect();

        names
            .into_iter()
            .map(|name| StatRow {
                name,
                team_names: team_names.clone(),
                values: self
                    .teams
                    .iter()
                    .map(|t| t.get(name).unwrap_or(&StatValue::Missing))
                    .collect(),
            })
            .collect()
    }
}

/// A count split by venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Split {
    pub home: u32,
    pub away: u32,
    pub total: u32,
}

/// Season aggregates for a team, from the `teams/statistics` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSeasonStats {
    pub team: TeamRef,
    /// Absent when the statistics span all competitions.
    pub league: Option<LeagueRef>,
    pub season: Season,
    pub form: Option<String>,
    pub played: Split,
    pub wins: Split,
    pub draws: Split,
    pub losses: Split,
    pub goals_for: Split,
    pub goals_against: Split,
    pub goals_for_average: Option<f64>,
    pub goals_against_average: Option<f64>,
    pub clean_sheets: Split,
    pub failed_to_score: Split,
    pub yellow_cards: u32,
    pub red_cards: u32,
    /// Formation and matches played with it, most used first.
    pub formations: Vec<(String, u32)>,
    pub biggest_win: (Option<String>, Option<String>),
    pub biggest_loss: (Option<String>, Option<String>),
    pub longest_streaks: Streaks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streaks {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

/// A home/away/total line of the team-stats table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub metric: &'static str,
    pub home: String,
    pub away: String,
    pub total: String,
}

impl MetricRow {
    fn split(metric: &'static str, s: Split) -> Self {
        Self {
            metric,
            home: s.home.to_string(),
            away: s.away.to_string(),
            total: s.total.to_string(),
        }
    }
}

impl TeamSeasonStats {
    pub fn win_rate(&self) -> Option<f64> {
        (self.played.total > 0)
            .then(|| f64::from(self.wins.total) / f64::from(self.played.total) * 100.0)
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for.total) - i64::from(self.goals_against.total)
    }

    pub fn metric_rows(&self) -> Vec<MetricRow> {
        vec![
            MetricRow::split("Played", self.played),
            MetricRow::split("Wins", self.wins),
            MetricRow::split("Draws", self.draws),
            MetricRow::split("Losses", self.losses),
            MetricRow::split("Goals For", self.goals_for),
            MetricRow::split("Goals Against", self.goals_against),
            MetricRow::split("Clean Sheets", self.clean_sheets),
            MetricRow::split("Failed To Score", self.failed_to_score),
        ]
    }
}
