//! Unit tests for the API-Football HTTP client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(
            &server.uri(),
            Some("test-key-123456".to_string()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn envelope(response: Value) -> Value {
        json!({
            "get": "fixtures",
            "parameters": {},
            "errors": [],
            "results": response.as_array().map(|a| a.len()).unwrap_or(1),
            "paging": { "current": 1, "total": 1 },
            "response": response
        })
    }

    #[tokio::test]
    async fn test_fetch_sends_key_header_and_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fixtures"))
            .and(query_param("league", "39"))
            .and(query_param("live", "all"))
            .and(header(API_KEY_HEADER, "test-key-123456"))
            .and(header("accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope(json!([{ "id": 1 }]))),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let query = Query::new().param("league", 39).param("live", "all");
        let envelope = client_for(&mock_server)
            .fetch(Endpoint::Fixtures, &query)
            .await
            .unwrap();

        assert_eq!(envelope.results, Some(1));
        assert_eq!(envelope.paging, Some(Paging { current: 1, total: 1 }));
        let items: Vec<Value> = envelope.into_list().unwrap();
        assert_eq!(items, vec![json!({ "id": 1 })]);
    }

    #[tokio::test]
    async fn test_fetch_nested_endpoint_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fixtures/lineups"))
            .and(query_param("fixture", "1035037"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .expect(1)
            .mount(&mock_server)
            .await;

        let query = Query::new().param("fixture", 1035037);
        let envelope = client_for(&mock_server)
            .fetch(Endpoint::FixtureLineups, &query)
            .await
            .unwrap();
        assert!(envelope.into_list::<Value>().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&mock_server.uri(), None, Duration::from_secs(5)).unwrap();
        let err = client
            .fetch(Endpoint::Fixtures, &Query::new())
            .await
            .unwrap_err();

        match err {
            SportyError::Auth { message } => assert!(message.contains(API_KEY_ENV_VAR)),
            other => panic!("Expected Auth error, got {:?}", other),
        }

        let blank = ApiClient::new(
            &mock_server.uri(),
            Some("   ".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();
        assert!(matches!(
            blank.fetch(Endpoint::Fixtures, &Query::new()).await,
            Err(SportyError::Auth { .. })
        ));
    }

    #[tokio::test]
    async fn test_http_401_is_auth_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fixtures"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid key" })),
            )
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .fetch(Endpoint::Fixtures, &Query::new())
            .await
            .unwrap_err();

        match err {
            SportyError::Auth { message } => assert_eq!(message, "Invalid key"),
            other => panic!("Expected Auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_429_is_rate_limit_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .fetch(Endpoint::Standings, &Query::new())
            .await
            .unwrap_err();

        match err {
            SportyError::RateLimit { message } => assert_eq!(message, "Too Many Requests"),
            other => panic!("Expected RateLimit error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_500_is_provider_error_with_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .fetch(Endpoint::Leagues, &Query::new())
            .await
            .unwrap_err();

        match err {
            SportyError::Provider { status, message } => {
                assert_eq!(status, Some(500));
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("Expected Provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_in_band_errors_are_classified() {
        let cases = vec![
            (
                json!({ "token": "Error/Missing application key." }),
                "auth",
            ),
            (
                json!({ "requests": "You have reached the request limit for the day" }),
                "rate",
            ),
            (
                json!({ "rateLimit": "Too many requests. Your rate limit is 10 requests per minute." }),
                "rate",
            ),
            (json!({ "season": "The Season field must contain 4 digits." }), "provider"),
        ];

        for (errors, expected) in cases {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "get": "fixtures",
                    "errors": errors,
                    "results": 0,
                    "response": []
                })))
                .mount(&mock_server)
                .await;

            let err = client_for(&mock_server)
                .fetch(Endpoint::Fixtures, &Query::new())
                .await
                .unwrap_err();

            match (expected, &err) {
                ("auth", SportyError::Auth { .. }) => {}
                ("rate", SportyError::RateLimit { .. }) => {}
                ("provider", SportyError::Provider { status: None, message }) => {
                    assert!(message.contains("4 digits"));
                }
                _ => panic!("Expected {} error, got {:?}", expected, err),
            }
        }
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(envelope(json!([])))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(
            &mock_server.uri(),
            Some("test-key-123456".to_string()),
            Duration::from_millis(50),
        )
        .unwrap();
        let err = client
            .fetch(Endpoint::Fixtures, &Query::new())
            .await
            .unwrap_err();

        match err {
            SportyError::Transport(e) => assert!(e.is_timeout()),
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_json_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .fetch(Endpoint::Teams, &Query::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SportyError::Json(_)));
    }

    #[tokio::test]
    async fn test_fetch_all_pages_walks_every_page() {
        let mock_server = MockServer::start().await;

        for (page, id) in [(1, 10), (2, 20)] {
            Mock::given(method("GET"))
                .and(path("/players"))
                .and(query_param("team", "42"))
                .and(query_param("page", page.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "errors": [],
                    "paging": { "current": page, "total": 2 },
                    "response": [{ "id": id }]
                })))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let query = Query::new().param("team", 42).param("season", 2023);
        let items: Vec<Value> = fetch_all_pages(&client_for(&mock_server), Endpoint::Players, &query)
            .await
            .unwrap();

        assert_eq!(items, vec![json!({ "id": 10 }), json!({ "id": 20 })]);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_fails_when_a_page_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [],
                "paging": { "current": 1, "total": 3 },
                "response": [{ "id": 1 }]
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result: Result<Vec<Value>> =
            fetch_all_pages(&client_for(&mock_server), Endpoint::Players, &Query::new()).await;
        assert!(matches!(
            result,
            Err(SportyError::Provider {
                status: Some(503),
                ..
            })
        ));
    }

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let client = ApiClient::new(
            "https://v3.football.api-sports.io/",
            None,
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.url(Endpoint::TeamStatistics),
            "https://v3.football.api-sports.io/teams/statistics"
        );
    }

    #[test]
    fn test_query_builder() {
        let query = Query::new()
            .param("league", 39)
            .opt("team", None::<u32>)
            .opt("season", Some(2023));

        assert_eq!(query.get("league"), Some("39"));
        assert_eq!(query.get("season"), Some("2023"));
        assert!(!query.contains("team"));
        assert_eq!(query.names(), vec!["league", "season"]);
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_empty_errors_are_not_errors() {
        assert!(classify_provider_errors(&json!([])).is_none());
        assert!(classify_provider_errors(&json!({})).is_none());
        assert!(classify_provider_errors(&Value::Null).is_none());
    }

    #[test]
    fn test_into_list_wraps_single_object() {
        let envelope: Envelope = serde_json::from_value(json!({
            "errors": [],
            "response": { "team": { "id": 42 } }
        }))
        .unwrap();
        let items: Vec<Value> = envelope.into_list().unwrap();
        assert_eq!(items.len(), 1);
    }
}
