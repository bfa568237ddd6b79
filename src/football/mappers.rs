//! Translate raw provider payloads into domain records.
//!
//! Identifiers, names and match status are required; a missing one fails
//! with [`SportyError::Mapping`] naming the dotted path. Counts the provider
//! leaves null before a season starts default to zero.

use std::collections::BTreeMap;

use chrono::DateTime;
use serde_json::Value;

use crate::{
    cli::types::{FixtureId, LeagueId, PlayerId, Season, TeamId},
    error::{Result, SportyError},
    models::{
        League, LeagueRef, Lineup, LineupPlayer, Match, MatchStatus, Record, Score, ScorePair,
        Split, Squad, SquadPlayer, Standing, StandingRow, StatValue, Statistics, Streaks, Team,
        TeamLineup, TeamMatchStats, TeamRef, TeamSeasonStats, TopMetric, TopPerformer,
    },
};

use super::types::{
    RawFixtureRecord, RawFixtureStatistics, RawGoals, RawLeague, RawLeagueRecord,
    RawLineupEntry, RawLineupRecord, RawMinuteBucket, RawPlayerRecord, RawRecord, RawSplit,
    RawStandingRow, RawStandingsRecord, RawTeam, RawTeamRecord, RawTeamSeasonStats,
};


fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| SportyError::mapping(field))
}

fn team_ref(raw: Option<RawTeam>, prefix: &str) -> Result<TeamRef> {
    let raw = required(raw, prefix)?;
    Ok(TeamRef {
        id: TeamId::new(required(raw.id, &format!("{prefix}.id"))?),
        name: required(raw.name, &format!("{prefix}.name"))?,
    })
}

fn league_ref(raw: RawLeague, prefix: &str) -> Result<LeagueRef> {
    Ok(LeagueRef {
        id: LeagueId::new(required(raw.id, &format!("{prefix}.id"))?),
        name: required(raw.name, &format!("{prefix}.name"))?,
        country: raw.country,
        season: raw.season.map(Season::new),
        round: raw.round,
    })
}

fn score_pair(raw: Option<RawGoals>) -> ScorePair {
    raw.map(|g| ScorePair {
        home: g.home,
        away: g.away,
    })
    .unwrap_or_default()
}

/// One `fixtures` record.
pub fn map_match(raw: RawFixtureRecord) -> Result<Match> {
    let fixture = required(raw.fixture, "fixture")?;
    let id = FixtureId::new(required(fixture.id, "fixture.id")?);

    let date = required(fixture.date, "fixture.date")?;
    let kickoff =
        DateTime::parse_from_rfc3339(&date).map_err(|_| SportyError::mapping("fixture.date"))?;

    let raw_status = required(fixture.status, "fixture.status")?;
    let status = MatchStatus::from_code(&required(raw_status.short, "fixture.status.short")?);
    // Finished or scheduled matches sometimes still report a minute.
    let elapsed = raw_status.elapsed.filter(|_| status.is_in_progress());

    let teams = required(raw.teams, "teams")?;
    let home = team_ref(teams.home, "teams.home")?;
    let away = team_ref(teams.away, "teams.away")?;

    let league = league_ref(required(raw.league, "league")?, "league")?;

    let score = raw.score.unwrap_or_default();
    let score = Score {
        goals: score_pair(raw.goals),
        halftime: score_pair(score.halftime),
        fulltime: score_pair(score.fulltime),
        extratime: score_pair(score.extratime),
        penalty: score_pair(score.penalty),
    };

    Ok(Match {
        id,
        kickoff,
        timezone: fixture.timezone.unwrap_or_else(|| "UTC".to_string()),
        status,
        elapsed,
        home,
        away,
        score,
        league,
        venue: fixture.venue.and_then(|v| match (v.name, v.city) {
            (Some(name), Some(city)) => Some(format!("{name}, {city}")),
            (name, city) => name.or(city),
        }),
        referee: fixture.referee.filter(|r| !r.trim().is_empty()),
    })
}

fn lineup_players(entries: Option<Vec<RawLineupEntry>>, prefix: &str) -> Result<Vec<LineupPlayer>> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| {
            let p = required(entry.player, &format!("{prefix}.player"))?;
            Ok(LineupPlayer {
                id: p.id.map(PlayerId::new),
                name: required(p.name, &format!("{prefix}.player.name"))?,
                number: p.number,
                position: p.pos,
                grid: p.grid,
            })
        })
        .collect()
}

/// All `fixtures/lineups` records for one fixture.
pub fn map_lineup(fixture: FixtureId, raw: Vec<RawLineupRecord>) -> Result<Lineup> {
    let teams = raw
        .into_iter()
        .map(|r| {
            Ok(TeamLineup {
                team: team_ref(r.team, "team")?,
                coach: r.coach.and_then(|c| c.name),
                formation: r.formation,
                starting: lineup_players(r.start_xi, "startXI")?,
                substitutes: lineup_players(r.substitutes, "substitutes")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Lineup { fixture, teams })
}

fn stat_value(value: Option<Value>) -> StatValue {
    match value {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => StatValue::Count(i),
            None => n.as_f64().map(StatValue::Decimal).unwrap_or(StatValue::Missing),
        },
        Some(Value::String(s)) => {
            let s = s.trim();
            if let Some(pct) = s.strip_suffix('%') {
                pct.trim()
                    .parse()
                    .map(StatValue::Percent)
                    .unwrap_or(StatValue::Missing)
            } else if let Ok(i) = s.parse::<i64>() {
                StatValue::Count(i)
            } else {
                s.parse()
                    .map(StatValue::Decimal)
                    .unwrap_or(StatValue::Missing)
            }
        }
        _ => StatValue::Missing,
    }
}

/// All `fixtures/statistics` records for one fixture.
pub fn map_statistics(fixture: FixtureId, raw: Vec<RawFixtureStatistics>) -> Result<Statistics> {
    let teams = raw
        .into_iter()
        .map(|r| {
            let values = r
                .statistics
                .unwrap_or_default()
                .into_iter()
                .map(|s| Ok((required(s.kind, "statistics.type")?, stat_value(s.value))))
                .collect::<Result<Vec<_>>>()?;
            Ok(TeamMatchStats {
                team: team_ref(r.team, "team")?,
                values,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Statistics { fixture, teams })
}

fn record(raw: RawRecord) -> Record {
    let goals = raw.goals.unwrap_or_default();
    Record {
        played: raw.played.unwrap_or(0),
        won: raw.win.unwrap_or(0),
        drawn: raw.draw.unwrap_or(0),
        lost: raw.lose.unwrap_or(0),
        goals_for: goals.scored.unwrap_or(0),
        goals_against: goals.against.unwrap_or(0),
    }
}

fn standing_row(raw: RawStandingRow) -> Result<StandingRow> {
    Ok(StandingRow {
        rank: required(raw.rank, "league.standings.rank")?,
        team: team_ref(raw.team, "league.standings.team")?,
        points: raw.points.unwrap_or(0),
        form: raw.form.filter(|f| !f.is_empty()),
        description: raw.description,
        all: record(required(raw.all, "league.standings.all")?),
        home: raw.home.map(record),
        away: raw.away.map(record),
    })
}

/// One `standings` record; yields a table per group.
pub fn map_standings(raw: RawStandingsRecord, season: Season) -> Result<Vec<Standing>> {
    let mut league = required(raw.league, "league")?;
    let groups = required(league.standings.take(), "league.standings")?;
    let league = league_ref(league, "league")?;
    let season = league.season.unwrap_or(season);

    groups
        .into_iter()
        .map(|group| {
            let name = group.first().and_then(|r| r.group.clone());
            let rows = group
                .into_iter()
                .map(standing_row)
                .collect::<Result<Vec<_>>>()?;
            Ok(Standing::new(league.clone(), season, name, rows))
        })
        .collect()
}

/// All `players` records for one team, across pages.
pub fn map_squad(team: TeamId, season: Season, raw: Vec<RawPlayerRecord>) -> Result<Squad> {
    let mut team_name = None;
    let mut players = Vec::with_capacity(raw.len());

    for record in raw {
        let player = required(record.player, "player")?;
        let stats = record.statistics.unwrap_or_default();
        // A player who moved clubs has one entry per team.
        let entry = stats
            .iter()
            .find(|s| s.team.as_ref().and_then(|t| t.id) == Some(team.as_u32()))
            .or_else(|| stats.first());

        if team_name.is_none() {
            team_name = entry
                .and_then(|s| s.team.as_ref())
                .filter(|t| t.id == Some(team.as_u32()))
                .and_then(|t| t.name.clone());
        }
        let games = entry.and_then(|s| s.games.clone()).unwrap_or_default();

        players.push(SquadPlayer {
            id: PlayerId::new(required(player.id, "player.id")?),
            name: required(player.name, "player.name")?,
            position: games.position,
            number: games.number,
            age: player.age,
            nationality: player.nationality,
        });
    }

    let team = TeamRef {
        id: team,
        name: team_name.unwrap_or_else(|| format!("Team {}", team)),
    };
    Ok(Squad::new(team, season, players))
}

/// A `players/top*` leaderboard, kept in provider order. Leaderboards are
/// per league, so the first statistics entry is the one for that league.
pub fn map_top_performers(
    metric: TopMetric,
    raw: Vec<RawPlayerRecord>,
) -> Result<Vec<TopPerformer>> {
    raw.into_iter()
        .enumerate()
        .map(|(i, record)| {
            let player = required(record.player, "player")?;
            let stats = required(
                record.statistics.and_then(|s| s.into_iter().next()),
                "statistics",
            )?;
            let games = stats.games.unwrap_or_default();
            let goals = stats.goals.unwrap_or_default();
            let cards = stats.cards.unwrap_or_default();

            Ok(TopPerformer {
                rank: i + 1,
                metric,
                id: PlayerId::new(required(player.id, "player.id")?),
                name: required(player.name, "player.name")?,
                age: player.age,
                nationality: player.nationality,
                position: games.position,
                team: team_ref(stats.team, "statistics.team")?,
                league: stats
                    .league
                    .map(|l| league_ref(l, "statistics.league"))
                    .transpose()?,
                appearances: games.appearances,
                minutes: games.minutes,
                goals: goals.total,
                assists: goals.assists,
                yellow_cards: cards.yellow,
                red_cards: cards.red,
            })
        })
        .collect()
}

/// One `leagues` record. The season shown is `requested` when the league
/// has it, else the one the provider flags as current.
pub fn map_league(raw: RawLeagueRecord, requested: Option<Season>) -> Result<League> {
    let league = required(raw.league, "league")?;
    let seasons = raw.seasons.unwrap_or_default();

    let season = requested
        .filter(|s| seasons.iter().any(|r| r.year == Some(s.as_u16())))
        .or_else(|| {
            seasons
                .iter()
                .find(|s| s.current == Some(true))
                .or_else(|| seasons.last())
                .and_then(|s| s.year)
                .map(Season::new)
        });

    Ok(League {
        id: LeagueId::new(required(league.id, "league.id")?),
        name: required(league.name, "league.name")?,
        country: raw
            .country
            .and_then(|c| c.name)
            .or(league.country)
            .unwrap_or_else(|| "World".to_string()),
        season,
        kind: league.kind,
    })
}

/// One `teams` record.
pub fn map_team(raw: RawTeamRecord) -> Result<Team> {
    let team = required(raw.team, "team")?;
    Ok(Team {
        id: TeamId::new(required(team.id, "team.id")?),
        name: required(team.name, "team.name")?,
        country: team.country,
        founded: team.founded,
        venue: raw.venue.and_then(|v| v.name),
    })
}

fn split(raw: Option<RawSplit>) -> Split {
    let raw = raw.unwrap_or_default();
    Split {
        home: raw.home.unwrap_or(0),
        away: raw.away.unwrap_or(0),
        total: raw.total.unwrap_or(0),
    }
}

fn average(raw: Option<&BTreeMap<String, Value>>) -> Option<f64> {
    match raw?.get("total")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn card_total(raw: Option<BTreeMap<String, RawMinuteBucket>>) -> u32 {
    raw.unwrap_or_default()
        .values()
        .filter_map(|b| b.total)
        .sum()
}

/// The `teams/statistics` response object.
pub fn map_team_statistics(raw: RawTeamSeasonStats, season: Season) -> Result<TeamSeasonStats> {
    let team = team_ref(raw.team, "team")?;
    let league = raw
        .league
        .filter(|l| l.id.is_some())
        .map(|l| league_ref(l, "league"))
        .transpose()?;
    let season = league.as_ref().and_then(|l| l.season).unwrap_or(season);

    let fixtures = raw.fixtures.unwrap_or_default();
    let goals = raw.goals.unwrap_or_default();
    let scored = goals.scored.unwrap_or_default();
    let against = goals.against.unwrap_or_default();
    let biggest = raw.biggest.unwrap_or_default();
    let streak = biggest.streak.unwrap_or_default();
    let cards = raw.cards.unwrap_or_default();

    let mut formations: Vec<(String, u32)> = raw
        .lineups
        .unwrap_or_default()
        .into_iter()
        .filter_map(|l| Some((l.formation?, l.played.unwrap_or(0))))
        .collect();
    formations.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let wins = biggest.wins.unwrap_or_default();
    let losses = biggest.loses.unwrap_or_default();

    Ok(TeamSeasonStats {
        team,
        league,
        season,
        form: raw.form.filter(|f| !f.is_empty()),
        played: split(fixtures.played),
        wins: split(fixtures.wins),
        draws: split(fixtures.draws),
        losses: split(fixtures.loses),
        goals_for: split(scored.total),
        goals_against: split(against.total),
        goals_for_average: average(scored.average.as_ref()),
        goals_against_average: average(against.average.as_ref()),
        clean_sheets: split(raw.clean_sheet),
        failed_to_score: split(raw.failed_to_score),
        yellow_cards: card_total(cards.yellow),
        red_cards: card_total(cards.red),
        formations,
        biggest_win: (wins.home, wins.away),
        biggest_loss: (losses.home, losses.away),
        longest_streaks: Streaks {
            wins: streak.wins.unwrap_or(0),
            draws: streak.draws.unwrap_or(0),
            losses: streak.loses.unwrap_or(0),
        },
    })
}
