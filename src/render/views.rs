use std::fmt::Display;

use crate::{
    cli::types::{LeagueId, OutputFormat, Season, StandingsFilter},
    models::{
        League, LineupPlayer, LineupRow, Match, MetricRow, Record, SquadPlayer, Standing,
        StandingRow, StatRow, Team, TeamLineup, TeamMatchStats, TeamSeasonStats, TopMetric,
        TopPerformer,
    },
};

use super::{render, table::key_values, Detailed, Tabular, LIVE_MARKER, NO_RESULTS};

const KICKOFF_FORMAT: &str = "%Y-%m-%d %H:%M";

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|h| h.to_string()).collect()
}

fn signed(n: i64) -> String {
    if n > 0 {
        format!("+{}", n)
    } else {
        n.to_string()
    }
}

// matches

fn status_cell(m: &Match) -> String {
    if !m.is_live() {
        return m.status.to_string();
    }
    match m.elapsed {
        Some(min) => format!("{} {} {}'", LIVE_MARKER, m.status, min),
        None => format!("{} {}", LIVE_MARKER, m.status),
    }
}

fn score_text(m: &Match) -> String {
    if m.score.goals.is_known() {
        m.score.goals.to_string()
    } else {
        "vs".to_string()
    }
}

impl Tabular for Match {
    fn headers(&self) -> Vec<String> {
        headers(&["ID", "Kickoff", "Status", "Home", "Score", "Away", "League"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.kickoff.format(KICKOFF_FORMAT).to_string(),
            status_cell(self),
            self.home.name.clone(),
            score_text(self),
            self.away.name.clone(),
            self.league.name.clone(),
        ]
    }
}

impl Detailed for Match {
    fn detail(&self) -> String {
        let status = match (self.is_live(), self.elapsed) {
            (true, Some(min)) => format!("{} {} ({}')", LIVE_MARKER, self.status.description(), min),
            (true, None) => format!("{} {}", LIVE_MARKER, self.status.description()),
            (false, _) => self.status.description().to_string(),
        };
        let league = match &self.league.country {
            Some(country) => format!("{} ({})", self.league.name, country),
            None => self.league.name.clone(),
        };

        let mut pairs = vec![
            ("Status", format!("{} [{}]", status, self.status)),
            (
                "Kickoff",
                format!("{} ({})", self.kickoff.format(KICKOFF_FORMAT), self.timezone),
            ),
            ("League", league),
        ];
        if let Some(round) = &self.league.round {
            pairs.push(("Round", round.clone()));
        }
        pairs.push(("Venue", or_dash(self.venue.as_ref())));
        pairs.push(("Referee", or_dash(self.referee.as_ref())));
        for (label, pair) in [
            ("Half-time", self.score.halftime),
            ("Full-time", self.score.fulltime),
            ("Extra time", self.score.extratime),
            ("Penalties", self.score.penalty),
        ] {
            if pair.is_known() {
                pairs.push((label, pair.to_string()));
            }
        }
        pairs.push(("Fixture ID", self.id.to_string()));

        format!(
            "{} {} {}\n{}",
            self.home.name,
            score_text(self),
            self.away.name,
            key_values(&pairs)
        )
    }
}

// standings

/// A standings row seen through one home/away/all filter.
#[derive(Debug, Clone, Copy)]
pub struct StandingView<'a> {
    pub row: &'a StandingRow,
    pub filter: StandingsFilter,
}

fn record_cells(record: Option<&Record>) -> Vec<String> {
    match record {
        Some(r) => vec![
            r.played.to_string(),
            r.won.to_string(),
            r.drawn.to_string(),
            r.lost.to_string(),
            r.goals_for.to_string(),
            r.goals_against.to_string(),
            signed(r.goal_difference()),
        ],
        None => vec!["-".to_string(); 7],
    }
}

impl Tabular for StandingView<'_> {
    fn headers(&self) -> Vec<String> {
        let mut h = headers(&["Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD"]);
        if self.filter == StandingsFilter::All {
            h.extend(headers(&["Pts", "Form"]));
        }
        h
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.row.rank.to_string(), self.row.team.name.clone()];
        cells.extend(record_cells(self.row.record(self.filter)));
        if self.filter == StandingsFilter::All {
            cells.push(self.row.points.to_string());
            cells.push(or_dash(self.row.form.as_ref()));
        }
        cells
    }
}

impl Detailed for StandingView<'_> {
    fn detail(&self) -> String {
        let mut pairs = Vec::new();
        if self.filter == StandingsFilter::All {
            pairs.push(("Points", self.row.points.to_string()));
        }
        match self.row.record(self.filter) {
            Some(r) => {
                pairs.push(("Played", r.played.to_string()));
                pairs.push(("Record", format!("W{} D{} L{}", r.won, r.drawn, r.lost)));
                pairs.push((
                    "Goals",
                    format!(
                        "{}:{} ({})",
                        r.goals_for,
                        r.goals_against,
                        signed(r.goal_difference())
                    ),
                ));
            }
            None => pairs.push(("Record", "-".to_string())),
        }
        if self.filter == StandingsFilter::All {
            pairs.push(("Form", or_dash(self.row.form.as_ref())));
            if let Some(desc) = &self.row.description {
                pairs.push(("Note", desc.clone()));
            }
        }
        format!(
            "{}. {}\n{}",
            self.row.rank,
            self.row.team.name,
            key_values(&pairs)
        )
    }
}

/// Every table with a title line. Grouped competitions print one table per
/// group.
pub fn render_standings(
    standings: &[Standing],
    filter: StandingsFilter,
    format: OutputFormat,
) -> String {
    if standings.is_empty() {
        return NO_RESULTS.to_string();
    }
    standings
        .iter()
        .map(|s| {
            let mut title = format!("{} {}", s.league.name, s.season);
            if let Some(group) = s.group.as_ref().filter(|g| **g != s.league.name) {
                title.push_str(&format!(" - {}", group));
            }
            if filter != StandingsFilter::All {
                title.push_str(&format!(" ({})", filter));
            }
            let views: Vec<StandingView<'_>> = s
                .rows
                .iter()
                .map(|row| StandingView { row, filter })
                .collect();
            format!("{}\n\n{}", title, render(&views, format))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// leagues and teams

impl Tabular for League {
    fn headers(&self) -> Vec<String> {
        headers(&["ID", "League", "Country", "Season", "Type"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.country.clone(),
            or_dash(self.season),
            or_dash(self.kind.as_ref()),
        ]
    }
}

impl Detailed for League {
    fn detail(&self) -> String {
        format!(
            "{}\n{}",
            self.name,
            key_values(&[
                ("ID", self.id.to_string()),
                ("Country", self.country.clone()),
                ("Season", or_dash(self.season)),
                ("Type", or_dash(self.kind.as_ref())),
            ])
        )
    }
}

impl Tabular for Team {
    fn headers(&self) -> Vec<String> {
        headers(&["ID", "Name", "Country", "Founded", "Venue"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            or_dash(self.country.as_ref()),
            or_dash(self.founded),
            or_dash(self.venue.as_ref()),
        ]
    }
}

impl Detailed for Team {
    fn detail(&self) -> String {
        format!(
            "{}\n{}",
            self.name,
            key_values(&[
                ("ID", self.id.to_string()),
                ("Country", or_dash(self.country.as_ref())),
                ("Founded", or_dash(self.founded)),
                ("Venue", or_dash(self.venue.as_ref())),
            ])
        )
    }
}

// leaderboards

impl Tabular for TopPerformer {
    fn headers(&self) -> Vec<String> {
        headers(&["Rank", "Player", "Team", "Apps", self.metric.label()])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.name.clone(),
            self.team.name.clone(),
            or_dash(self.appearances),
            self.value().to_string(),
        ]
    }
}

impl Detailed for TopPerformer {
    fn detail(&self) -> String {
        let per_game = self
            .per_game()
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        let per_game_label = format!("{} per game", self.metric.label());
        format!(
            "{}. {}\n{}",
            self.rank,
            self.name,
            key_values(&[
                ("Team", self.team.name.clone()),
                ("Position", or_dash(self.position.as_ref())),
                ("Age", or_dash(self.age)),
                ("Nationality", or_dash(self.nationality.as_ref())),
                ("Appearances", or_dash(self.appearances)),
                ("Minutes", or_dash(self.minutes)),
                ("Goals", or_dash(self.goals)),
                ("Assists", or_dash(self.assists)),
                ("Yellow Cards", or_dash(self.yellow_cards)),
                ("Red Cards", or_dash(self.red_cards)),
                (per_game_label.as_str(), per_game),
            ])
        )
    }
}

/// A leaderboard under a "Top Scorers - Premier League 2023" title. The
/// league name comes from the records themselves.
pub fn render_leaderboard(
    performers: &[TopPerformer],
    metric: TopMetric,
    league: LeagueId,
    season: Season,
    format: OutputFormat,
) -> String {
    if performers.is_empty() {
        return NO_RESULTS.to_string();
    }
    let league_name = performers
        .iter()
        .find_map(|p| p.league.as_ref().map(|l| l.name.clone()))
        .unwrap_or_else(|| format!("League {}", league));
    format!(
        "{} - {} {}\n\n{}",
        metric.title(),
        league_name,
        season,
        render(performers, format)
    )
}

// squads and lineups

impl Tabular for SquadPlayer {
    fn headers(&self) -> Vec<String> {
        headers(&["ID", "#", "Name", "Position", "Age", "Nationality"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            or_dash(self.number),
            self.name.clone(),
            or_dash(self.position.as_ref()),
            or_dash(self.age),
            or_dash(self.nationality.as_ref()),
        ]
    }
}

impl Detailed for SquadPlayer {
    fn detail(&self) -> String {
        format!(
            "{}\n{}",
            self.name,
            key_values(&[
                ("ID", self.id.to_string()),
                ("Number", or_dash(self.number)),
                ("Position", or_dash(self.position.as_ref())),
                ("Age", or_dash(self.age)),
                ("Nationality", or_dash(self.nationality.as_ref())),
            ])
        )
    }
}

impl Tabular for LineupRow<'_> {
    fn headers(&self) -> Vec<String> {
        headers(&["Team", "Role", "#", "Player", "Pos", "Grid"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.team.to_string(),
            self.role.to_string(),
            or_dash(self.player.number),
            self.player.name.clone(),
            or_dash(self.player.position.as_ref()),
            or_dash(self.player.grid.as_ref()),
        ]
    }
}

fn player_line(p: &LineupPlayer) -> String {
    let number = p.number.map(|n| format!("{:>2}", n)).unwrap_or_else(|| " -".to_string());
    match &p.position {
        Some(pos) => format!("    {}  {} ({})", number, p.name, pos),
        None => format!("    {}  {}", number, p.name),
    }
}

impl Detailed for TeamLineup {
    fn detail(&self) -> String {
        let mut lines = vec![match &self.formation {
            Some(f) => format!("{} ({})", self.team.name, f),
            None => self.team.name.clone(),
        }];
        lines.push(format!("  Coach: {}", or_dash(self.coach.as_ref())));
        lines.push("  Starting XI:".to_string());
        lines.extend(self.starting.iter().map(player_line));
        if !self.substitutes.is_empty() {
            lines.push("  Substitutes:".to_string());
            lines.extend(self.substitutes.iter().map(player_line));
        }
        lines.join("\n")
    }
}

// statistics

impl Tabular for StatRow<'_> {
    fn headers(&self) -> Vec<String> {
        let mut h = vec!["Statistic".to_string()];
        h.extend(self.team_names.iter().map(|n| n.to_string()));
        h
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.name.to_string()];
        cells.extend(self.values.iter().map(|v| v.to_string()));
        cells
    }
}

impl Detailed for TeamMatchStats {
    fn detail(&self) -> String {
        let pairs: Vec<(&str, String)> = self
            .values
            .iter()
            .map(|(name, value)| (name.as_str(), value.to_string()))
            .collect();
        format!("{}\n{}", self.team.name, key_values(&pairs))
    }
}

impl Tabular for MetricRow {
    fn headers(&self) -> Vec<String> {
        headers(&["Metric", "Home", "Away", "Total"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.metric.to_string(),
            self.home.clone(),
            self.away.clone(),
            self.total.clone(),
        ]
    }
}

impl TeamSeasonStats {
    /// "Arsenal - Premier League 2023" style heading.
    pub fn title(&self) -> String {
        match &self.league {
            Some(l) => format!("{} - {} {}", self.team.name, l.name, self.season),
            None => format!("{} - All competitions {}", self.team.name, self.season),
        }
    }
}

impl Detailed for TeamSeasonStats {
    fn detail(&self) -> String {
        let home_away = |h: &Option<String>, a: &Option<String>| {
            format!("{} (home), {} (away)", or_dash(h.as_ref()), or_dash(a.as_ref()))
        };
        let avg = |v: Option<f64>| v.map(|x| format!("{:.2}", x)).unwrap_or_else(|| "-".to_string());

        let mut pairs = vec![
            ("Played", self.played.total.to_string()),
            (
                "Record",
                format!(
                    "W{} D{} L{}",
                    self.wins.total, self.draws.total, self.losses.total
                ),
            ),
            (
                "Win rate",
                self.win_rate()
                    .map(|r| format!("{:.1}%", r))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Goals",
                format!(
                    "{}:{} ({})",
                    self.goals_for.total,
                    self.goals_against.total,
                    signed(self.goal_difference())
                ),
            ),
            (
                "Avg goals",
                format!(
                    "{} scored, {} conceded",
                    avg(self.goals_for_average),
                    avg(self.goals_against_average)
                ),
            ),
            ("Clean sheets", self.clean_sheets.total.to_string()),
            ("Failed to score", self.failed_to_score.total.to_string()),
            (
                "Cards",
                format!("{} yellow, {} red", self.yellow_cards, self.red_cards),
            ),
            (
                "Biggest win",
                home_away(&self.biggest_win.0, &self.biggest_win.1),
            ),
            (
                "Biggest loss",
                home_away(&self.biggest_loss.0, &self.biggest_loss.1),
            ),
            (
                "Longest streaks",
                format!(
                    "{} wins, {} draws, {} losses",
                    self.longest_streaks.wins,
                    self.longest_streaks.draws,
                    self.longest_streaks.losses
                ),
            ),
        ];
        if let Some(form) = &self.form {
            pairs.push(("Form", form.clone()));
        }
        if !self.formations.is_empty() {
            let formations = self
                .formations
                .iter()
                .map(|(f, n)| format!("{} x{}", f, n))
                .collect::<Vec<_>>()
                .join(", ");
            pairs.push(("Formations", formations));
        }

        format!("{}\n{}", self.title(), key_values(&pairs))
    }
}
