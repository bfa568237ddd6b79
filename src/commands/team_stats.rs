use tracing::info;

use crate::{
    cli::types::{LeagueId, OutputFormat, Season, TeamId},
    config::Defaults,
    error::Result,
    football::{
        mappers::map_team_statistics, types::RawTeamSeasonStats, Endpoint, FootballApi, Query,
    },
    render::{render_detailed, render_table, NO_RESULTS},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStatsParams {
    pub team: TeamId,
    pub season: Option<Season>,
    /// Without a league the provider aggregates across competitions.
    pub league: Option<LeagueId>,
    pub format: OutputFormat,
}

pub async fn handle_team_stats<A: FootballApi + ?Sized>(
    api: &A,
    defaults: &Defaults,
    params: TeamStatsParams,
) -> Result<String> {
    let season = params.season.unwrap_or(defaults.season);
    info!(
        "Fetching season statistics for team {} ({})...",
        params.team, season
    );

    let query = Query::new()
        .param("team", params.team)
        .param("season", season)
        .opt("league", params.league);
    let raw: Vec<RawTeamSeasonStats> = api
        .fetch(Endpoint::TeamStatistics, &query)
        .await?
        .into_list()?;

    let Some(raw) = raw.into_iter().next() else {
        return Ok(NO_RESULTS.to_string());
    };
    let stats = map_team_statistics(raw, season)?;

    Ok(match params.format {
        OutputFormat::Table => format!(
            "{}\n\n{}",
            stats.title(),
            render_table(&stats.metric_rows())
        ),
        OutputFormat::Detailed => render_detailed(&[stats]),
    })
}
