use tracing::info;

use crate::{
    cli::types::{OutputFormat, TeamId},
    error::Result,
    football::{mappers::map_team, types::RawTeamRecord, Endpoint, FootballApi, Query},
    render::render,
};

pub async fn handle_team<A: FootballApi + ?Sized>(
    api: &A,
    team: TeamId,
    format: OutputFormat,
) -> Result<String> {
    info!("Fetching team {}...", team);
    let query = Query::new().param("id", team);
    let raw: Vec<RawTeamRecord> = api.fetch(Endpoint::Teams, &query).await?.into_list()?;
    let teams = raw.into_iter().map(map_team).collect::<Result<Vec<_>>>()?;

    Ok(render(&teams, format))
}
