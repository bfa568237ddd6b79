//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{
    CardType, FixtureId, LeagueId, MatchDate, OutputFormat, Season, StandingsFilter, TeamId,
};

/// Filters accepted by `matches scores`.
#[derive(Debug, Args)]
pub struct MatchScoresArgs {
    /// League ID to filter matches.
    #[clap(long, short)]
    pub league: Option<LeagueId>,

    /// Team ID to filter matches.
    #[clap(long, short)]
    pub team: Option<TeamId>,

    /// Only keep matches whose league belongs to this country.
    #[clap(long, short)]
    pub country: Option<String>,

    /// Single match day (YYYY-MM-DD). Conflicts with --from-date/--to-date.
    #[clap(long, short)]
    pub date: Option<MatchDate>,

    /// Start of a date range (YYYY-MM-DD).
    #[clap(long)]
    pub from_date: Option<MatchDate>,

    /// End of a date range (YYYY-MM-DD).
    #[clap(long)]
    pub to_date: Option<MatchDate>,

    /// Season year (e.g. 2023 for 2023/2024). Defaults to the current season.
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Show only matches currently in progress.
    #[clap(long, overrides_with = "no_live")]
    pub live: bool,

    /// Disable --live.
    #[clap(long = "no-live", overrides_with = "live")]
    pub no_live: bool,

    /// Timezone for kickoff times (IANA name, e.g. Europe/London).
    #[clap(long, short = 'z', visible_alias = "tz")]
    pub timezone: Option<String>,

    /// Output format.
    #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Filters accepted by `live scores`, a narrowed `matches scores --live`.
#[derive(Debug, Args)]
pub struct LiveScoresArgs {
    /// League ID to filter matches.
    #[clap(long, short)]
    pub league: Option<LeagueId>,

    /// Only keep matches whose league belongs to this country.
    #[clap(long, short)]
    pub country: Option<String>,

    /// Timezone for kickoff times (IANA name, e.g. Europe/London).
    #[clap(long, short = 'z', visible_alias = "tz")]
    pub timezone: Option<String>,

    /// Output format.
    #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum MatchesCmd {
    /// Display match scores. Defaults to the current season.
    Scores(MatchScoresArgs),
}

#[derive(Debug, Subcommand)]
pub enum LiveCmd {
    /// Display scores of matches in progress (alias for `matches scores --live`).
    Scores(LiveScoresArgs),
}

/// Options shared by the `top-performer` leaderboards.
#[derive(Debug, Args)]
pub struct TopPerformerArgs {
    /// League ID.
    #[clap(long, short)]
    pub league: LeagueId,

    /// Season year. Defaults to the current season.
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Number of players to show.
    #[clap(long, short = 'n', default_value_t = 10)]
    pub limit: usize,

    /// Output format.
    #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum TopPerformerCmd {
    /// Top goal scorers of a league season.
    Goals(TopPerformerArgs),
    /// Top assist providers of a league season.
    Assists(TopPerformerArgs),
    /// Most booked players of a league season.
    Cards {
        #[clap(flatten)]
        args: TopPerformerArgs,

        /// Which cards to rank by.
        #[clap(long, short = 'c', value_enum, default_value_t = CardType::Yellow)]
        card_type: CardType,
    },
}

#[derive(Debug, Subcommand)]
pub enum StandingsCmd {
    /// Display the league table for a league and season.
    League {
        /// League ID.
        #[clap(long, short)]
        league: Option<LeagueId>,

        /// League name to look up when no ID is given (e.g. "Premier League").
        #[clap(long, short)]
        name: Option<String>,

        /// Country used to narrow the --name lookup.
        #[clap(long, short)]
        country: Option<String>,

        /// Season year. Defaults to the current season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Which record to show.
        #[clap(long, value_enum, default_value_t = StandingsFilter::All)]
        filter: StandingsFilter,

        /// Output format.
        #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List leagues and their IDs.
    ListLeagues {
        /// Filter by country name.
        #[clap(long, short)]
        country: Option<String>,

        /// Season year. Defaults to the current season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Output format.
        #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCmd {
    /// Store the API-Football key in the config file.
    SetApiKey {
        /// The key issued by api-sports.io
        api_key: String,
    },
    /// Show the configured API key (masked).
    GetApiKey,
    /// Show the current configuration (API key masked).
    Show,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Match information
    Matches {
        #[clap(subcommand)]
        cmd: MatchesCmd,
    },

    /// Live match information
    Live {
        #[clap(subcommand)]
        cmd: LiveCmd,
    },

    /// Per-team statistics for a fixture
    Stats {
        fixture_id: FixtureId,

        /// Output format.
        #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Line-ups for a fixture
    Lineup {
        fixture_id: FixtureId,

        /// Output format.
        #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Players in a team's squad for a season
    Squad {
        team_id: TeamId,

        /// Season year. Defaults to the current season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Output format.
        #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Past results for a team
    History {
        team_id: TeamId,

        /// Days back from --to-date (default 30).
        #[clap(long)]
        days: Option<u32>,

        /// Start date (YYYY-MM-DD). Overrides --days.
        #[clap(long)]
        from_date: Option<MatchDate>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[clap(long)]
        to_date: Option<MatchDate>,

        /// Season to search. Alone it selects the whole season; with a date
        /// window it picks the season when the window crosses 1 July.
        #[clap(long, short)]
        season: Option<Season>,

        /// Maximum number of matches to show (most recent first).
        #[clap(long)]
        limit: Option<usize>,

        /// Timezone for kickoff times (IANA name).
        #[clap(long, short = 'z', visible_alias = "tz")]
        timezone: Option<String>,

        /// Output format.
        #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Season statistics for a team
    TeamStats {
        team_id: TeamId,

        /// Season year. Defaults to the current season.
        #[clap(long, short)]
        season: Option<Season>,

        /// League ID to scope the statistics.
        #[clap(long, short)]
        league: Option<LeagueId>,

        /// Output format.
        #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Team information
    Team {
        team_id: TeamId,

        /// Output format.
        #[clap(long, short, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// League standings
    Standings {
        #[clap(subcommand)]
        cmd: StandingsCmd,
    },

    /// League leaderboards for goals, assists and cards
    TopPerformer {
        #[clap(subcommand)]
        cmd: TopPerformerCmd,
    },

    /// Manage the sporty configuration
    Config {
        #[clap(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sporty", about = "Football scores, lineups and standings from API-Football")]
pub struct Sporty {
    /// Enable debug logging on stderr.
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
