use tracing::info;

use crate::{
    cli::types::{FixtureId, OutputFormat},
    error::Result,
    football::{mappers::map_lineup, types::RawLineupRecord, Endpoint, FootballApi, Query},
    render::{render_detailed, render_table},
};

/// Line-ups for a fixture: one row per player in table form, one block per
/// team in detailed form.
pub async fn handle_lineup<A: FootballApi + ?Sized>(
    api: &A,
    fixture: FixtureId,
    format: OutputFormat,
) -> Result<String> {
    info!("Fetching line-ups for fixture {}...", fixture);
    let query = Query::new().param("fixture", fixture);
    let raw: Vec<RawLineupRecord> = api
        .fetch(Endpoint::FixtureLineups, &query)
        .await?
        .into_list()?;
    let lineup = map_lineup(fixture, raw)?;

    Ok(match format {
        OutputFormat::Table => render_table(&lineup.rows()),
        OutputFormat::Detailed => render_detailed(&lineup.teams),
    })
}
