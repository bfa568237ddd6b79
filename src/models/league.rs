use crate::cli::types::{LeagueId, Season, TeamId};

/// A competition as listed by the `leagues` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub country: String,
    /// Season flagged as current by the provider, or the requested one.
    pub season: Option<Season>,
    /// "League" or "Cup".
    pub kind: Option<String>,
}

impl League {
    /// Case-insensitive substring match on the league name.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub country: Option<String>,
    pub founded: Option<u16>,
    pub venue: Option<String>,
}
