//! End-to-end tests for command handlers against a mock API-Football server

use std::time::Duration;

use chrono::NaiveDate;
use serde_json::{json, Value};
use sporty::{
    cli::types::{OutputFormat, StandingsFilter},
    commands::{
        handle_match_scores, handle_standings, handle_top_performer, MatchQueryParams,
        StandingsParams, TopPerformerParams,
    },
    config::Defaults,
    football::ApiClient,
    models::TopMetric,
    LeagueId, MatchDate, Season, SportyError,
};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const KEY: &str = "test-key-123456";

fn defaults() -> Defaults {
    Defaults {
        timezone: "UTC".to_string(),
        season: Season::new(2023),
        today: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
    }
}

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), Some(KEY.to_string()), Duration::from_secs(5)).unwrap()
}

fn envelope(response: Value) -> Value {
    let results = response.as_array().map(|a| a.len()).unwrap_or(1);
    json!({
        "get": "test",
        "parameters": {},
        "errors": [],
        "results": results,
        "paging": { "current": 1, "total": 1 },
        "response": response,
    })
}

fn fixture(
    id: u32,
    status: &str,
    elapsed: Option<u32>,
    home: &str,
    away: &str,
    goals: (u32, u32),
) -> Value {
    json!({
        "fixture": {
            "id": id,
            "referee": null,
            "timezone": "UTC",
            "date": "2024-03-10T15:00:00+00:00",
            "venue": { "name": "Emirates Stadium", "city": "London" },
            "status": { "long": "", "short": status, "elapsed": elapsed }
        },
        "league": { "id": 39, "name": "Premier League", "country": "England", "season": 2023 },
        "teams": {
            "home": { "id": 42, "name": home },
            "away": { "id": 50, "name": away }
        },
        "goals": { "home": goals.0, "away": goals.1 },
        "score": {}
    })
}

fn standings(rows: Value) -> Value {
    json!([{
        "league": {
            "id": 39,
            "name": "Premier League",
            "country": "England",
            "season": 2023,
            "standings": [rows]
        }
    }])
}

fn standing_row(rank: u32, id: u32, name: &str, points: i32) -> Value {
    let record = json!({ "played": 28, "win": 20, "draw": 4, "lose": 4,
                         "goals": { "for": 60, "against": 20 } });
    json!({
        "rank": rank,
        "team": { "id": id, "name": name },
        "points": points,
        "goalsDiff": 40,
        "group": "Premier League",
        "form": "WWDLW",
        "all": record,
        "home": record,
        "away": record
    })
}

#[tokio::test]
async fn test_match_scores_for_league_and_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .and(header("x-apisports-key", KEY))
        .and(query_param("league", "39"))
        .and(query_param("date", "2024-03-10"))
        .and(query_param("season", "2023"))
        .and(query_param("timezone", "UTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            fixture(2, "FT", Some(90), "Arsenal", "Brentford", (2, 1)),
            fixture(1, "FT", Some(90), "Chelsea", "Newcastle", (3, 2)),
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let params = MatchQueryParams {
        league: Some(LeagueId::new(39)),
        date: Some(MatchDate::new(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())),
        ..MatchQueryParams::default()
    };
    let output = handle_match_scores(&client(&server), &defaults(), params)
        .await
        .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[2].contains("Chelsea") && lines[2].contains("3-2"));
    assert!(lines[3].contains("Arsenal") && lines[3].contains("2-1"));
}

#[tokio::test]
async fn test_live_scores_show_elapsed_minutes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .and(query_param("live", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            fixture(7, "2H", Some(67), "Arsenal", "Brentford", (1, 0)),
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let params = MatchQueryParams {
        live: true,
        ..MatchQueryParams::default()
    };
    let output = handle_match_scores(&client(&server), &defaults(), params)
        .await
        .unwrap();
    assert!(output.contains("● 2H 67'"));
}

#[tokio::test]
async fn test_conflicting_dates_send_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let day = MatchDate::new(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    let params = MatchQueryParams {
        date: Some(day),
        from_date: Some(day),
        ..MatchQueryParams::default()
    };
    let err = handle_match_scores(&client(&server), &defaults(), params)
        .await
        .unwrap_err();
    assert!(matches!(err, SportyError::Usage { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_empty_response_reports_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&server)
        .await;

    let output = handle_match_scores(&client(&server), &defaults(), MatchQueryParams::default())
        .await
        .unwrap();
    assert_eq!(output, "No results found.");
}

#[tokio::test]
async fn test_rate_limit_in_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": { "requests": "You have reached the request limit for the day" },
            "results": 0,
            "paging": { "current": 1, "total": 1 },
            "response": []
        })))
        .mount(&server)
        .await;

    let err = handle_match_scores(&client(&server), &defaults(), MatchQueryParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SportyError::RateLimit { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_standings_by_league_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leagues"))
        .and(query_param("country", "England"))
        .and(query_param("season", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {
                "league": { "id": 39, "name": "Premier League", "type": "League" },
                "country": { "name": "England" },
                "seasons": [{ "year": 2023, "current": true }]
            },
            {
                "league": { "id": 40, "name": "Championship", "type": "League" },
                "country": { "name": "England" },
                "seasons": [{ "year": 2023, "current": true }]
            }
        ]))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("league", "39"))
        .and(query_param("season", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(standings(json!([
            standing_row(2, 50, "Liverpool", 64),
            standing_row(1, 42, "Arsenal", 65),
        ])))))
        .expect(1)
        .mount(&server)
        .await;

    let params = StandingsParams {
        league: None,
        name: Some("premier league".to_string()),
        country: Some("England".to_string()),
        season: None,
        filter: StandingsFilter::All,
        format: OutputFormat::Table,
    };
    let output = handle_standings(&client(&server), &defaults(), params)
        .await
        .unwrap();

    assert!(output.starts_with("Premier League 2023"));
    let arsenal = output.find("Arsenal").unwrap();
    let liverpool = output.find("Liverpool").unwrap();
    assert!(arsenal < liverpool);
}

#[tokio::test]
async fn test_ambiguous_league_name_is_usage_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leagues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {
                "league": { "id": 39, "name": "Premier League", "type": "League" },
                "country": { "name": "England" },
                "seasons": [{ "year": 2023, "current": true }]
            },
            {
                "league": { "id": 235, "name": "Premier League", "type": "League" },
                "country": { "name": "Russia" },
                "seasons": [{ "year": 2023, "current": true }]
            }
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let params = StandingsParams {
        league: None,
        name: Some("Premier League".to_string()),
        country: None,
        season: None,
        filter: StandingsFilter::All,
        format: OutputFormat::Table,
    };
    let err = handle_standings(&client(&server), &defaults(), params)
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("39"));
    assert!(message.contains("235"));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_top_assists_leaderboard() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/topassists"))
        .and(query_param("league", "39"))
        .and(query_param("season", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{
            "player": { "id": 629, "name": "O. Watkins", "age": 28, "nationality": "England" },
            "statistics": [{
                "team": { "id": 66, "name": "Aston Villa" },
                "league": { "id": 39, "name": "Premier League", "season": 2023 },
                "games": { "appearences": 37, "minutes": 3236, "position": "Attacker" },
                "goals": { "total": 19, "assists": 13 },
                "cards": { "yellow": 4, "red": 0 }
            }]
        }]))))
        .expect(1)
        .mount(&server)
        .await;

    let params = TopPerformerParams {
        league: LeagueId::new(39),
        season: None,
        limit: 10,
        format: OutputFormat::Table,
    };
    let output = handle_top_performer(&client(&server), &defaults(), TopMetric::Assists, params)
        .await
        .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Top Assists - Premier League 2023");
    assert!(lines[4].contains("O. Watkins") && lines[4].ends_with("13"));
}
