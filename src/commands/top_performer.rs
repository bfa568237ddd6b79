//! `top-performer goals|assists|cards`: league leaderboards.

use tracing::info;

use crate::{
    cli::{
        types::{LeagueId, OutputFormat, Season},
        TopPerformerArgs,
    },
    config::Defaults,
    error::Result,
    football::{
        mappers::map_top_performers, types::RawPlayerRecord, Endpoint, FootballApi, Query,
    },
    models::TopMetric,
    render::render_leaderboard,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPerformerParams {
    pub league: LeagueId,
    pub season: Option<Season>,
    pub limit: usize,
    pub format: OutputFormat,
}

impl From<TopPerformerArgs> for TopPerformerParams {
    fn from(args: TopPerformerArgs) -> Self {
        Self {
            league: args.league,
            season: args.season,
            limit: args.limit,
            format: args.format,
        }
    }
}

fn leaderboard_endpoint(metric: TopMetric) -> Endpoint {
    match metric {
        TopMetric::Goals => Endpoint::TopScorers,
        TopMetric::Assists => Endpoint::TopAssists,
        TopMetric::YellowCards => Endpoint::TopYellowCards,
        TopMetric::RedCards => Endpoint::TopRedCards,
    }
}

/// One leaderboard request; the provider ranks the players, the first
/// `limit` are shown.
pub async fn handle_top_performer<A: FootballApi + ?Sized>(
    api: &A,
    defaults: &Defaults,
    metric: TopMetric,
    params: TopPerformerParams,
) -> Result<String> {
    let season = params.season.unwrap_or(defaults.season);
    let endpoint = leaderboard_endpoint(metric);
    info!(
        "Fetching {} for league {} ({})...",
        metric.title().to_lowercase(),
        params.league,
        season
    );

    let query = Query::new()
        .param("league", params.league)
        .param("season", season);
    let raw: Vec<RawPlayerRecord> = api.fetch(endpoint, &query).await?.into_list()?;

    let mut performers = map_top_performers(metric, raw)?;
    performers.truncate(params.limit);

    Ok(render_leaderboard(
        &performers,
        metric,
        params.league,
        season,
        params.format,
    ))
}
