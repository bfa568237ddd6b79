//! `history TEAM_ID`: a team's recent results.

use std::fmt;

use chrono::Days;
use tracing::info;

use crate::{
    cli::types::{MatchDate, OutputFormat, Season, TeamId},
    config::Defaults,
    error::{Result, SportyError},
    football::{FootballApi, Query},
    models::{Match, Outcome},
    render::{render, NO_RESULTS},
};

use super::{matches::fetch_matches, resolve_timezone, season_for_range};

/// Window used when neither --days nor --from-date is given.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryParams {
    pub team: TeamId,
    pub days: Option<u32>,
    pub from_date: Option<MatchDate>,
    pub to_date: Option<MatchDate>,
    pub season: Option<Season>,
    pub limit: Option<usize>,
    pub timezone: Option<String>,
    pub format: OutputFormat,
}

/// Either a whole season (`--season` alone) or a date window ending at
/// `--to-date`, today by default.
pub fn build_history_query(params: &HistoryParams, defaults: &Defaults) -> Result<Query> {
    let query = Query::new().param("team", params.team);
    let timezone = resolve_timezone(params.timezone.as_deref(), defaults);

    let windowed =
        params.days.is_some() || params.from_date.is_some() || params.to_date.is_some();
    match params.season {
        Some(season) if !windowed => {
            return Ok(query.param("season", season).param("timezone", timezone))
        }
        _ => {}
    }

    let to = params
        .to_date
        .map(|d| d.as_naive())
        .unwrap_or(defaults.today);
    let from = match params.from_date {
        Some(d) => d.as_naive(),
        None => {
            let days = params.days.unwrap_or(DEFAULT_HISTORY_DAYS);
            to.checked_sub_days(Days::new(u64::from(days)))
                .ok_or_else(|| SportyError::usage("--days is out of range"))?
        }
    };
    if from > to {
        return Err(SportyError::usage(format!(
            "--from-date {} is after --to-date {}",
            MatchDate::new(from),
            MatchDate::new(to)
        )));
    }
    let season = match params.season {
        Some(season) => season,
        None => season_for_range(from, to)?,
    };

    Ok(query
        .param("from", MatchDate::new(from))
        .param("to", MatchDate::new(to))
        .param("season", season)
        .param("timezone", timezone))
}

/// Aggregate over the finished matches of a history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl HistorySummary {
    pub fn from_matches(team: TeamId, matches: &[Match]) -> Self {
        let mut summary = Self::default();
        for m in matches {
            let (Some(outcome), Some((scored, conceded))) =
                (m.outcome_for(team), m.goals_for_team(team))
            else {
                continue;
            };
            summary.played += 1;
            summary.goals_for += scored;
            summary.goals_against += conceded;
            match outcome {
                Outcome::Win => summary.won += 1,
                Outcome::Draw => summary.drawn += 1,
                Outcome::Loss => summary.lost += 1,
            }
        }
        summary
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

impl fmt::Display for HistorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gd = self.goal_difference();
        write!(
            f,
            "Played {}  W {}  D {}  L {}  GF {}  GA {}  GD {}{}",
            self.played,
            self.won,
            self.drawn,
            self.lost,
            self.goals_for,
            self.goals_against,
            if gd > 0 { "+" } else { "" },
            gd
        )
    }
}

pub async fn handle_history<A: FootballApi + ?Sized>(
    api: &A,
    defaults: &Defaults,
    params: HistoryParams,
) -> Result<String> {
    let query = build_history_query(&params, defaults)?;

    info!("Fetching match history for team {}...", params.team);
    let mut matches = fetch_matches(api, &query).await?;
    matches.reverse();
    if let Some(limit) = params.limit {
        matches.truncate(limit);
    }

    if matches.is_empty() {
        return Ok(NO_RESULTS.to_string());
    }
    let summary = HistorySummary::from_matches(params.team, &matches);
    Ok(format!(
        "{}\n\nSummary: {}",
        render(&matches, params.format),
        summary
    ))
}
