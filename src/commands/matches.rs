//! `matches scores` and `live scores`.

use tracing::info;

use crate::{
    cli::{
        types::{LeagueId, MatchDate, OutputFormat, Season, TeamId},
        LiveScoresArgs, MatchScoresArgs,
    },
    config::Defaults,
    error::{Result, SportyError},
    football::{mappers::map_match, types::RawFixtureRecord, Endpoint, FootballApi, Query},
    models::Match,
    render::render,
};

use super::{resolve_timezone, season_for_range};

/// Filters for a fixtures query. `live scores` is this with `live` forced on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchQueryParams {
    pub league: Option<LeagueId>,
    pub team: Option<TeamId>,
    /// Applied to the mapped matches; the fixtures endpoint cannot filter on it.
    pub country: Option<String>,
    pub date: Option<MatchDate>,
    pub from_date: Option<MatchDate>,
    pub to_date: Option<MatchDate>,
    pub season: Option<Season>,
    pub live: bool,
    pub timezone: Option<String>,
    pub format: OutputFormat,
}

impl From<MatchScoresArgs> for MatchQueryParams {
    fn from(args: MatchScoresArgs) -> Self {
        Self {
            league: args.league,
            team: args.team,
            country: args.country,
            date: args.date,
            from_date: args.from_date,
            to_date: args.to_date,
            season: args.season,
            live: args.live && !args.no_live,
            timezone: args.timezone,
            format: args.format,
        }
    }
}

impl From<LiveScoresArgs> for MatchQueryParams {
    fn from(args: LiveScoresArgs) -> Self {
        Self {
            league: args.league,
            country: args.country,
            live: true,
            timezone: args.timezone,
            format: args.format,
            ..Self::default()
        }
    }
}

/// Build the fixtures query: the user's filters, the timezone, and for
/// non-live queries the season containing the requested dates.
pub fn build_match_query(params: &MatchQueryParams, defaults: &Defaults) -> Result<Query> {
    if params.date.is_some() && (params.from_date.is_some() || params.to_date.is_some()) {
        return Err(SportyError::usage(
            "--date cannot be combined with --from-date or --to-date",
        ));
    }

    let mut query = Query::new()
        .opt("league", params.league)
        .opt("team", params.team)
        .opt("date", params.date)
        .opt("from", params.from_date)
        .opt("to", params.to_date);

    if params.live {
        query = query.param("live", "all").opt("season", params.season);
    } else {
        let season = match (params.season, params.from_date, params.to_date) {
            (Some(season), _, _) => season,
            (None, Some(from), Some(to)) => season_for_range(from.as_naive(), to.as_naive())?,
            (None, _, _) => match params.date.or(params.from_date).or(params.to_date) {
                Some(d) => Season::current(d.as_naive()),
                None => defaults.season,
            },
        };
        query = query.param("season", season);
    }

    Ok(query.param(
        "timezone",
        resolve_timezone(params.timezone.as_deref(), defaults),
    ))
}

/// Query, map and filter fixtures. Shared by `history`.
pub(crate) async fn fetch_matches<A: FootballApi + ?Sized>(
    api: &A,
    query: &Query,
) -> Result<Vec<Match>> {
    let raw: Vec<RawFixtureRecord> = api.fetch(Endpoint::Fixtures, query).await?.into_list()?;
    let mut matches = raw.into_iter().map(map_match).collect::<Result<Vec<_>>>()?;
    matches.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then(a.id.cmp(&b.id)));
    Ok(matches)
}

pub async fn handle_match_scores<A: FootballApi + ?Sized>(
    api: &A,
    defaults: &Defaults,
    params: MatchQueryParams,
) -> Result<String> {
    let query = build_match_query(&params, defaults)?;

    if params.live {
        info!("Fetching live matches...");
    } else {
        info!("Fetching matches...");
    }
    let mut matches = fetch_matches(api, &query).await?;

    if let Some(country) = params.country.as_deref() {
        matches.retain(|m| {
            m.league
                .country
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(country))
        });
    }
    info!("{} matches", matches.len());

    Ok(render(&matches, params.format))
}
