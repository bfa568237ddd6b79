//! Raw provider payloads.
//!
//! Every field is optional: the provider omits or nulls fields freely, and
//! the mappers decide which absences are fatal.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTeam {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub founded: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVenue {
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLeague {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub season: Option<u16>,
    pub round: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Only on `standings`: one table per group.
    pub standings: Option<Vec<Vec<RawStandingRow>>>,
}

// fixtures

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFixtureRecord {
    pub fixture: Option<RawFixture>,
    pub league: Option<RawLeague>,
    pub teams: Option<RawTeams>,
    pub goals: Option<RawGoals>,
    pub score: Option<RawScore>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFixture {
    pub id: Option<u32>,
    pub referee: Option<String>,
    pub timezone: Option<String>,
    /// RFC 3339 kickoff in the requested timezone.
    pub date: Option<String>,
    pub venue: Option<RawVenue>,
    pub status: Option<RawStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatus {
    pub long: Option<String>,
    pub short: Option<String>,
    pub elapsed: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTeams {
    pub home: Option<RawTeam>,
    pub away: Option<RawTeam>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawGoals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScore {
    pub halftime: Option<RawGoals>,
    pub fulltime: Option<RawGoals>,
    pub extratime: Option<RawGoals>,
    pub penalty: Option<RawGoals>,
}

// fixtures/lineups

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLineupRecord {
    pub team: Option<RawTeam>,
    pub coach: Option<RawCoach>,
    pub formation: Option<String>,
    #[serde(rename = "startXI")]
    pub start_xi: Option<Vec<RawLineupEntry>>,
    pub substitutes: Option<Vec<RawLineupEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCoach {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLineupEntry {
    pub player: Option<RawLineupPlayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLineupPlayer {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub number: Option<u16>,
    pub pos: Option<String>,
    pub grid: Option<String>,
}

// fixtures/statistics

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFixtureStatistics {
    pub team: Option<RawTeam>,
    pub statistics: Option<Vec<RawStatEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatEntry {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Integer, "55%" string, decimal string, or null.
    pub value: Option<Value>,
}

// standings

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStandingsRecord {
    pub league: Option<RawLeague>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStandingRow {
    pub rank: Option<u32>,
    pub team: Option<RawTeam>,
    pub points: Option<i32>,
    pub group: Option<String>,
    pub form: Option<String>,
    pub description: Option<String>,
    pub all: Option<RawRecord>,
    pub home: Option<RawRecord>,
    pub away: Option<RawRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub played: Option<u32>,
    pub win: Option<u32>,
    pub draw: Option<u32>,
    pub lose: Option<u32>,
    pub goals: Option<RawRecordGoals>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecordGoals {
    #[serde(rename = "for")]
    pub scored: Option<u32>,
    pub against: Option<u32>,
}

// leagues

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLeagueRecord {
    pub league: Option<RawLeague>,
    pub country: Option<RawCountry>,
    pub seasons: Option<Vec<RawSeason>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountry {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSeason {
    pub year: Option<u16>,
    pub current: Option<bool>,
}

// teams

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTeamRecord {
    pub team: Option<RawTeam>,
    pub venue: Option<RawVenue>,
}

// players, players/top*

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayerRecord {
    pub player: Option<RawPlayer>,
    pub statistics: Option<Vec<RawPlayerStatistics>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayer {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub age: Option<u16>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayerStatistics {
    pub team: Option<RawTeam>,
    pub league: Option<RawLeague>,
    pub games: Option<RawGames>,
    pub goals: Option<RawPlayerGoals>,
    pub cards: Option<RawPlayerCards>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGames {
    pub number: Option<u16>,
    pub position: Option<String>,
    // Provider spelling.
    #[serde(rename = "appearences")]
    pub appearances: Option<u32>,
    pub minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayerGoals {
    pub total: Option<u32>,
    pub assists: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayerCards {
    pub yellow: Option<u32>,
    pub red: Option<u32>,
}

// teams/statistics

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTeamSeasonStats {
    pub league: Option<RawLeague>,
    pub team: Option<RawTeam>,
    pub form: Option<String>,
    pub fixtures: Option<RawFixtureCounts>,
    pub goals: Option<RawGoalsSummary>,
    pub biggest: Option<RawBiggest>,
    pub clean_sheet: Option<RawSplit>,
    pub failed_to_score: Option<RawSplit>,
    pub lineups: Option<Vec<RawFormation>>,
    pub cards: Option<RawCards>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawSplit {
    pub home: Option<u32>,
    pub away: Option<u32>,
    pub total: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFixtureCounts {
    pub played: Option<RawSplit>,
    pub wins: Option<RawSplit>,
    pub draws: Option<RawSplit>,
    pub loses: Option<RawSplit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGoalsSummary {
    #[serde(rename = "for")]
    pub scored: Option<RawGoalSide>,
    pub against: Option<RawGoalSide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGoalSide {
    pub total: Option<RawSplit>,
    /// Averages arrive as strings ("1.9") on most plans.
    pub average: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBiggest {
    pub streak: Option<RawStreak>,
    pub wins: Option<RawHomeAway>,
    pub loses: Option<RawHomeAway>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStreak {
    pub wins: Option<u32>,
    pub draws: Option<u32>,
    pub loses: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHomeAway {
    pub home: Option<String>,
    pub away: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFormation {
    pub formation: Option<String>,
    pub played: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCards {
    pub yellow: Option<BTreeMap<String, RawMinuteBucket>>,
    pub red: Option<BTreeMap<String, RawMinuteBucket>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMinuteBucket {
    pub total: Option<u32>,
}
