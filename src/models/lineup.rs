use std::fmt;

use crate::cli::types::{FixtureId, PlayerId};

use super::TeamRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupPlayer {
    /// Absent for players the provider has not catalogued.
    pub id: Option<PlayerId>,
    pub name: String,
    pub number: Option<u16>,
    /// Shorthand position: G, D, M or F.
    pub position: Option<String>,
    /// Pitch grid cell as "row:column", starters only.
    pub grid: Option<String>,
}

/// One team's sheet for a fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLineup {
    pub team: TeamRef,
    pub coach: Option<String>,
    pub formation: Option<String>,
    pub starting: Vec<LineupPlayer>,
    pub substitutes: Vec<LineupPlayer>,
}

/// Both team sheets for a fixture, home side first as delivered by the
/// provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineup {
    pub fixture: FixtureId,
    pub teams: Vec<TeamLineup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineupRole {
    Starter,
    Substitute,
}

impl fmt::Display for LineupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineupRole::Starter => write!(f, "XI"),
            LineupRole::Substitute => write!(f, "SUB"),
        }
    }
}

/// A single player line of a lineup, used for the table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupRow<'a> {
    pub team: &'a str,
    pub role: LineupRole,
    pub player: &'a LineupPlayer,
}

impl Lineup {
    /// Flatten both sheets into rows: each team's starters then its
    /// substitutes, in provider order.
    pub fn rows(&self) -> Vec<LineupRow<'_>> {
        self.teams
            .iter()
            .flat_map(|t| {
                let starters = t.starting.iter().map(move |p| LineupRow {
                    team: &t.team.name,
                    role: LineupRole::Starter,
                    player: p,
                });
                let subs = t.substitutes.iter().map(move |p| LineupRow {
                    team: &t.team.name,
                    role: LineupRole::Substitute,
                    player: p,
                });
                starters.chain(subs)
            })
            .collect()
    }
}
