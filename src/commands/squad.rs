use tracing::info;

use crate::{
    cli::types::{OutputFormat, Season, TeamId},
    config::Defaults,
    error::Result,
    football::{
        fetch_all_pages, mappers::map_squad, types::RawPlayerRecord, Endpoint, FootballApi, Query,
    },
    render::render,
};

/// A team's players for a season. The players endpoint is paginated; all
/// pages are fetched before anything is rendered.
pub async fn handle_squad<A: FootballApi + ?Sized>(
    api: &A,
    defaults: &Defaults,
    team: TeamId,
    season: Option<Season>,
    format: OutputFormat,
) -> Result<String> {
    let season = season.unwrap_or(defaults.season);
    info!("Fetching squad for team {} ({})...", team, season);

    let query = Query::new().param("team", team).param("season", season);
    let raw: Vec<RawPlayerRecord> = fetch_all_pages(api, Endpoint::Players, &query).await?;
    let squad = map_squad(team, season, raw)?;
    info!("{}: {} players", squad.team.name, squad.players.len());

    Ok(render(&squad.players, format))
}
