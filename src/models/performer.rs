use crate::cli::types::{CardType, PlayerId};

use super::{LeagueRef, TeamRef};

/// The statistic a leaderboard is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMetric {
    Goals,
    Assists,
    YellowCards,
    RedCards,
}

impl TopMetric {
    pub fn for_cards(card_type: CardType) -> Self {
        match card_type {
            CardType::Yellow => TopMetric::YellowCards,
            CardType::Red => TopMetric::RedCards,
        }
    }

    /// Column header for the ranked value.
    pub fn label(&self) -> &'static str {
        match self {
            TopMetric::Goals => "Goals",
            TopMetric::Assists => "Assists",
            TopMetric::YellowCards => "Yellow",
            TopMetric::RedCards => "Red",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TopMetric::Goals => "Top Scorers",
            TopMetric::Assists => "Top Assists",
            TopMetric::YellowCards => "Most Yellow Cards",
            TopMetric::RedCards => "Most Red Cards",
        }
    }
}

/// One leaderboard entry. `rank` is the provider's order, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPerformer {
    pub rank: usize,
    pub metric: TopMetric,
    pub id: PlayerId,
    pub name: String,
    pub age: Option<u16>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub team: TeamRef,
    pub league: Option<LeagueRef>,
    pub appearances: Option<u32>,
    pub minutes: Option<u32>,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
    pub yellow_cards: Option<u32>,
    pub red_cards: Option<u32>,
}

impl TopPerformer {
    /// The value the leaderboard is ranked by; the provider sends null for zero.
    pub fn value(&self) -> u32 {
        match self.metric {
            TopMetric::Goals => self.goals,
            TopMetric::Assists => self.assists,
            TopMetric::YellowCards => self.yellow_cards,
            TopMetric::RedCards => self.red_cards,
        }
        .unwrap_or(0)
    }

    pub fn per_game(&self) -> Option<f64> {
        match self.appearances {
            Some(games) if games > 0 => Some(f64::from(self.value()) / f64::from(games)),
            _ => None,
        }
    }
}
