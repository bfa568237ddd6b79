use tracing::info;

use crate::{
    cli::types::{FixtureId, OutputFormat},
    error::Result,
    football::{
        mappers::map_statistics, types::RawFixtureStatistics, Endpoint, FootballApi, Query,
    },
    render::{render_detailed, render_table},
};

/// Team statistics for a fixture, one statistic per row with a column per
/// team.
pub async fn handle_stats<A: FootballApi + ?Sized>(
    api: &A,
    fixture: FixtureId,
    format: OutputFormat,
) -> Result<String> {
    info!("Fetching statistics for fixture {}...", fixture);
    let query = Query::new().param("fixture", fixture);
    let raw: Vec<RawFixtureStatistics> = api
        .fetch(Endpoint::FixtureStatistics, &query)
        .await?
        .into_list()?;
    let stats = map_statistics(fixture, raw)?;

    Ok(match format {
        OutputFormat::Table => render_table(&stats.rows()),
        OutputFormat::Detailed => render_detailed(&stats.teams),
    })
}
