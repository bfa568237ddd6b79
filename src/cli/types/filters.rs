//! Output and filter selectors shared by CLI commands.

use std::fmt;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One row per record with a fixed column set
    #[default]
    Table,
    /// One multi-line block per record
    Detailed,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Table => "table",
            OutputFormat::Detailed => "detailed",
        };
        write!(f, "{}", s)
    }
}

/// Which part of a team's record a standings table shows.
///
/// The provider reports every split in one payload; the filter only selects
/// the columns that are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StandingsFilter {
    /// Full season record
    #[default]
    All,
    /// Home matches only
    Home,
    /// Away matches only
    Away,
}

impl fmt::Display for StandingsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StandingsFilter::All => "all",
            StandingsFilter::Home => "home",
            StandingsFilter::Away => "away",
        };
        write!(f, "{}", s)
    }
}

/// Which disciplinary leaderboard `top-performer cards` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CardType {
    #[default]
    Yellow,
    Red,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CardType::Yellow => "yellow",
            CardType::Red => "red",
        };
        write!(f, "{}", s)
    }
}
