use crate::cli::types::{PlayerId, Season};

use super::TeamRef;

/// Broad playing position used to order a squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
    Other,
}

impl PositionGroup {
    /// Classify the provider's position label ("Goalkeeper", "Defender",
    /// "Midfielder", "Attacker") or the lineup shorthand ("G", "D", "M", "F").
    pub fn classify(position: Option<&str>) -> Self {
        let Some(p) = position else {
            return PositionGroup::Other;
        };
        let p = p.trim().to_lowercase();
        match p.as_str() {
            "g" | "gk" | "goalkeeper" => PositionGroup::Goalkeeper,
            "d" | "cb" | "lb" | "rb" | "lwb" | "rwb" => PositionGroup::Defender,
            "m" | "cm" | "cdm" | "cam" | "dm" | "am" | "lm" | "rm" => PositionGroup::Midfielder,
            "f" | "cf" | "st" | "lw" | "rw" => PositionGroup::Attacker,
            _ if p.contains("defender") => PositionGroup::Defender,
            _ if p.contains("midfielder") => PositionGroup::Midfielder,
            _ if p.contains("attacker") || p.contains("forward") || p.contains("striker") => {
                PositionGroup::Attacker
            }
            _ => PositionGroup::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquadPlayer {
    pub id: PlayerId,
    pub name: String,
    pub position: Option<String>,
    pub number: Option<u16>,
    pub age: Option<u16>,
    pub nationality: Option<String>,
}

/// A team's registered players for one season, ordered goalkeepers first,
/// then defenders, midfielders, attackers, then by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Squad {
    pub team: TeamRef,
    pub season: Season,
    pub players: Vec<SquadPlayer>,
}

impl Squad {
    pub fn new(team: TeamRef, season: Season, mut players: Vec<SquadPlayer>) -> Self {
        players.sort_by(|a, b| {
            PositionGroup::classify(a.position.as_deref())
                .cmp(&PositionGroup::classify(b.position.as_deref()))
                .then_with(|| a.name.cmp(&b.name))
        });
        Self {
            team,
            season,
            players,
        }
    }
}
