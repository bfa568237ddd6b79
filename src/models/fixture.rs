//! Matches (fixtures) and their status.

use chrono::{DateTime, FixedOffset};
use std::fmt;

use crate::cli::types::{FixtureId, LeagueId, Season, TeamId};

/// Lifecycle of a fixture, translated from the provider's short status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStatus {
    NotStarted,
    FirstHalf,
    HalfTime,
    SecondHalf,
    ExtraTime,
    /// Break between the end of regulation and extra time.
    BreakTime,
    Penalties,
    Suspended,
    Interrupted,
    /// In play, period not reported.
    Live,
    Finished,
    FinishedAfterExtraTime,
    FinishedAfterPenalties,
    Postponed,
    Cancelled,
    Abandoned,
    TechnicalLoss,
    WalkOver,
    /// A code this client does not know yet.
    Unknown(String),
}

impl MatchStatus {
    /// Translate a provider short code. Unrecognized codes are kept verbatim.
    pub fn from_code(code: &str) -> Self {
        match code {
            "TBD" | "NS" => MatchStatus::NotStarted,
            "1H" => MatchStatus::FirstHalf,
            "HT" => MatchStatus::HalfTime,
            "2H" => MatchStatus::SecondHalf,
            "ET" => MatchStatus::ExtraTime,
            "BT" => MatchStatus::BreakTime,
            "P" => MatchStatus::Penalties,
            "SUSP" => MatchStatus::Suspended,
            "INT" => MatchStatus::Interrupted,
            "LIVE" => MatchStatus::Live,
            "FT" => MatchStatus::Finished,
            "AET" => MatchStatus::FinishedAfterExtraTime,
            "PEN" => MatchStatus::FinishedAfterPenalties,
            "PST" => MatchStatus::Postponed,
            "CANC" => MatchStatus::Cancelled,
            "ABD" => MatchStatus::Abandoned,
            "AWD" => MatchStatus::TechnicalLoss,
            "WO" => MatchStatus::WalkOver,
            other => MatchStatus::Unknown(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            MatchStatus::NotStarted => "NS",
            MatchStatus::FirstHalf => "1H",
            MatchStatus::HalfTime => "HT",
            MatchStatus::SecondHalf => "2H",
            MatchStatus::ExtraTime => "ET",
            MatchStatus::BreakTime => "BT",
            MatchStatus::Penalties => "P",
            MatchStatus::Suspended => "SUSP",
            MatchStatus::Interrupted => "INT",
            MatchStatus::Live => "LIVE",
            MatchStatus::Finished => "FT",
            MatchStatus::FinishedAfterExtraTime => "AET",
            MatchStatus::FinishedAfterPenalties => "PEN",
            MatchStatus::Postponed => "PST",
            MatchStatus::Cancelled => "CANC",
            MatchStatus::Abandoned => "ABD",
            MatchStatus::TechnicalLoss => "AWD",
            MatchStatus::WalkOver => "WO",
            MatchStatus::Unknown(code) => code.as_str(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            MatchStatus::NotStarted => "Not Started",
            MatchStatus::FirstHalf => "First Half",
            MatchStatus::HalfTime => "Halftime",
            MatchStatus::SecondHalf => "Second Half",
            MatchStatus::ExtraTime => "Extra Time",
            MatchStatus::BreakTime => "Break Time",
            MatchStatus::Penalties => "Penalty In Progress",
            MatchStatus::Suspended => "Match Suspended",
            MatchStatus::Interrupted => "Match Interrupted",
            MatchStatus::Live => "In Progress",
            MatchStatus::Finished => "Match Finished",
            MatchStatus::FinishedAfterExtraTime => "Match Finished After Extra Time",
            MatchStatus::FinishedAfterPenalties => "Match Finished After Penalty",
            MatchStatus::Postponed => "Match Postponed",
            MatchStatus::Cancelled => "Match Cancelled",
            MatchStatus::Abandoned => "Match Abandoned",
            MatchStatus::TechnicalLoss => "Technical Loss",
            MatchStatus::WalkOver => "WalkOver",
            MatchStatus::Unknown(_) => "Unknown",
        }
    }

    /// Play has started and not yet ended. Only these statuses carry an
    /// elapsed-minutes value.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            MatchStatus::FirstHalf
                | MatchStatus::HalfTime
                | MatchStatus::SecondHalf
                | MatchStatus::ExtraTime
                | MatchStatus::BreakTime
                | MatchStatus::Penalties
                | MatchStatus::Suspended
                | MatchStatus::Interrupted
                | MatchStatus::Live
        )
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            MatchStatus::Finished
                | MatchStatus::FinishedAfterExtraTime
                | MatchStatus::FinishedAfterPenalties
        )
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A team as referenced from another record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

/// A league as referenced from another record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueRef {
    pub id: LeagueId,
    pub name: String,
    pub country: Option<String>,
    pub season: Option<Season>,
    pub round: Option<String>,
}

/// Goals for one period. Either side is `None` until the period is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScorePair {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

impl ScorePair {
    pub fn is_known(&self) -> bool {
        self.home.is_some() && self.away.is_some()
    }
}

impl fmt::Display for ScorePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.home, self.away) {
            (Some(h), Some(a)) => write!(f, "{}-{}", h, a),
            _ => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Score {
    /// Current or final goals.
    pub goals: ScorePair,
    pub halftime: ScorePair,
    pub fulltime: ScorePair,
    pub extratime: ScorePair,
    pub penalty: ScorePair,
}

/// One fixture, built from a single provider record.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: FixtureId,
    pub kickoff: DateTime<FixedOffset>,
    /// Timezone name the provider rendered `kickoff` in.
    pub timezone: String,
    pub status: MatchStatus,
    /// Minutes played; only present while the match is in progress.
    pub elapsed: Option<u32>,
    pub home: TeamRef,
    pub away: TeamRef,
    pub score: Score,
    pub league: LeagueRef,
    pub venue: Option<String>,
    pub referee: Option<String>,
}

/// Result of a finished match from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Match {
    pub fn is_live(&self) -> bool {
        self.status.is_in_progress()
    }

    /// Goals scored and conceded by `team`, if it played in this match and
    /// the score is known.
    pub fn goals_for_team(&self, team: TeamId) -> Option<(u32, u32)> {
        let (home, away) = (self.score.goals.home?, self.score.goals.away?);
        if self.home.id == team {
            Some((home, away))
        } else if self.away.id == team {
            Some((away, home))
        } else {
            None
        }
    }

    /// Outcome for `team` once the match is finished.
    pub fn outcome_for(&self, team: TeamId) -> Option<Outcome> {
        if !self.status.is_finished() {
            return None;
        }
        let (scored, conceded) = self.goals_for_team(team)?;
        // A level score decided on penalties is still a draw in the record.
        Some(match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        })
    }
}
