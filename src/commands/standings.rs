//! `standings league` and `standings list-leagues`.

use tracing::{debug, info};

use crate::{
    cli::types::{LeagueId, OutputFormat, Season, StandingsFilter},
    config::Defaults,
    error::{Result, SportyError},
    football::{
        mappers::{map_league, map_standings},
        types::{RawLeagueRecord, RawStandingsRecord},
        Endpoint, FootballApi, Query,
    },
    models::League,
    render::{render, render_standings},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsParams {
    pub league: Option<LeagueId>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub season: Option<Season>,
    pub filter: StandingsFilter,
    pub format: OutputFormat,
}

async fn fetch_leagues<A: FootballApi + ?Sized>(
    api: &A,
    country: Option<&str>,
    season: Season,
) -> Result<Vec<League>> {
    let query = Query::new().opt("country", country).param("season", season);
    let raw: Vec<RawLeagueRecord> = api.fetch(Endpoint::Leagues, &query).await?.into_list()?;
    let mut leagues = raw
        .into_iter()
        .map(|r| map_league(r, Some(season)))
        .collect::<Result<Vec<_>>>()?;
    leagues.sort_by(|a, b| a.country.cmp(&b.country).then_with(|| a.name.cmp(&b.name)));
    Ok(leagues)
}

/// Pick the single league matching `name`. Exact (case-insensitive) names
/// win over substring matches; anything other than one candidate is a usage
/// error listing what was found.
pub fn select_league(leagues: &[League], name: &str) -> Result<LeagueId> {
    let exact: Vec<&League> = leagues
        .iter()
        .filter(|l| l.name.eq_ignore_ascii_case(name.trim()))
        .collect();
    let candidates: Vec<&League> = if exact.is_empty() {
        leagues.iter().filter(|l| l.name_matches(name.trim())).collect()
    } else {
        exact
    };

    match candidates.as_slice() {
        [] => Err(SportyError::usage(format!(
            "no league matches \"{}\"; try `sporty standings list-leagues`",
            name
        ))),
        [one] => Ok(one.id),
        many => {
            let listing = many
                .iter()
                .map(|l| format!("  {}  {} ({})", l.id, l.name, l.country))
                .collect::<Vec<_>>()
                .join("\n");
            Err(SportyError::usage(format!(
                "\"{}\" matches {} leagues; pass --league with one of:\n{}",
                name,
                many.len(),
                listing
            )))
        }
    }
}

pub async fn handle_standings<A: FootballApi + ?Sized>(
    api: &A,
    defaults: &Defaults,
    params: StandingsParams,
) -> Result<String> {
    let season = params.season.unwrap_or(defaults.season);

    let league = match (params.league, params.name.as_deref()) {
        (Some(_), Some(_)) => {
            return Err(SportyError::usage("--league cannot be combined with --name"))
        }
        (None, None) => return Err(SportyError::usage("either --league or --name is required")),
        (Some(id), None) => id,
        (None, Some(name)) => {
            info!("Looking up league \"{}\"...", name);
            let leagues = fetch_leagues(api, params.country.as_deref(), season).await?;
            let id = select_league(&leagues, name)?;
            debug!("resolved \"{}\" to league {}", name, id);
            id
        }
    };

    info!("Fetching standings for league {} ({})...", league, season);
    let query = Query::new().param("league", league).param("season", season);
    let raw: Vec<RawStandingsRecord> =
        api.fetch(Endpoint::Standings, &query).await?.into_list()?;

    let mut standings = Vec::new();
    for record in raw {
        standings.extend(map_standings(record, season)?);
    }

    Ok(render_standings(&standings, params.filter, params.format))
}

pub async fn handle_list_leagues<A: FootballApi + ?Sized>(
    api: &A,
    defaults: &Defaults,
    country: Option<String>,
    season: Option<Season>,
    format: OutputFormat,
) -> Result<String> {
    let season = season.unwrap_or(defaults.season);
    info!("Fetching leagues for {}...", season);
    let leagues = fetch_leagues(api, country.as_deref(), season).await?;
    Ok(render(&leagues, format))
}
