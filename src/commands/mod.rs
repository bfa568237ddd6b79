//! Command implementations for the sporty CLI
//!
//! Every handler validates its options first, so usage errors never cost a
//! request, then issues one logical query through a [`FootballApi`], maps
//! the payload and returns the rendered text. Printing is left to `main`.

pub mod config;
pub mod history;
pub mod lineup;
pub mod matches;
pub mod squad;
pub mod standings;
pub mod stats;
pub mod team;
pub mod team_stats;
pub mod top_performer;


pub use config::handle_config;
pub use history::{build_history_query, handle_history, HistoryParams, HistorySummary};
pub use lineup::handle_lineup;
pub use matches::{build_match_query, handle_match_scores, MatchQueryParams};
pub use squad::handle_squad;
pub use standings::{handle_list_leagues, handle_standings, select_league, StandingsParams};
pub use stats::handle_stats;
pub use team::handle_team;
pub use team_stats::{handle_team_stats, TeamStatsParams};
pub use top_performer::{handle_top_performer, TopPerformerParams};

use chrono::NaiveDate;

use crate::{
    cli::{
        types::{MatchDate, Season},
        Commands, LiveCmd, MatchesCmd, StandingsCmd, TopPerformerCmd,
    },
    config::Defaults,
    error::{Result, SportyError},
    football::FootballApi,
    models::TopMetric,
};

/// Timezone sent with match queries: the user's choice, else the configured
/// default.
pub(crate) fn resolve_timezone(explicit: Option<&str>, defaults: &Defaults) -> String {
    explicit
        .map(str::trim)
        .filter(|tz| !tz.is_empty())
        .unwrap_or(&defaults.timezone)
        .to_string()
}

/// Season sent with a `from`/`to` window when the user gave none. A window
/// whose ends fall in different seasons would silently lose one side, so it
/// is rejected.
pub(crate) fn season_for_range(from: NaiveDate, to: NaiveDate) -> Result<Season> {
    let (first, last) = (Season::current(from), Season::current(to));
    if first != last {
        return Err(SportyError::usage(format!(
            "{} to {} spans seasons {} and {}; pass --season to choose one",
            MatchDate::new(from),
            MatchDate::new(to),
            first,
            last
        )));
    }
    Ok(first)
}

/// Run a provider-backed command. `config` commands never reach the API and
/// are handled by [`handle_config`].
pub async fn dispatch<A: FootballApi + ?Sized>(
    api: &A,
    defaults: &Defaults,
    command: Commands,
) -> Result<String> {
    match command {
        Commands::Matches {
            cmd: MatchesCmd::Scores(args),
        } => handle_match_scores(api, defaults, args.into()).await,
        Commands::Live {
            cmd: LiveCmd::Scores(args),
        } => handle_match_scores(api, defaults, args.into()).await,
        Commands::Stats { fixture_id, format } => handle_stats(api, fixture_id, format).await,
        Commands::Lineup { fixture_id, format } => handle_lineup(api, fixture_id, format).await,
        Commands::Squad {
            team_id,
            season,
            format,
        } => handle_squad(api, defaults, team_id, season, format).await,
        Commands::History {
            team_id,
            days,
            from_date,
            to_date,
            season,
            limit,
            timezone,
            format,
        } => {
            let params = HistoryParams {
                team: team_id,
                days,
                from_date,
                to_date,
                season,
                limit,
                timezone,
                format,
            };
            handle_history(api, defaults, params).await
        }
        Commands::TeamStats {
            team_id,
            season,
            league,
            format,
        } => {
            let params = TeamStatsParams {
                team: team_id,
                season,
                league,
                format,
            };
            handle_team_stats(api, defaults, params).await
        }
        Commands::Team { team_id, format } => handle_team(api, team_id, format).await,
        Commands::Standings {
            cmd:
                StandingsCmd::League {
                    league,
                    name,
                    country,
                    season,
                    filter,
                    format,
                },
        } => {
            let params = StandingsParams {
                league,
                name,
                country,
                season,
                filter,
                format,
            };
            handle_standings(api, defaults, params).await
        }
        Commands::Standings {
            cmd:
                StandingsCmd::ListLeagues {
                    country,
                    season,
                    format,
                },
        } => handle_list_leagues(api, defaults, country, season, format).await,
        Commands::TopPerformer { cmd } => {
            let (metric, args) = match cmd {
                TopPerformerCmd::Goals(args) => (TopMetric::Goals, args),
                TopPerformerCmd::Assists(args) => (TopMetric::Assists, args),
                TopPerformerCmd::Cards { args, card_type } => {
                    (TopMetric::for_cards(card_type), args)
                }
            };
            handle_top_performer(api, defaults, metric, args.into()).await
        }
        Commands::Config { .. } => Err(SportyError::usage(
            "config commands do not query the provider",
        )),
    }
}
