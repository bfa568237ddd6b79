//! In-memory [`FootballApi`] and sample payloads for unit tests.

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use async_trait::async_trait;
use serde_json::{json, Value};

use super::http::{Endpoint, Envelope, FootballApi, Query};
use crate::error::{Result, SportyError};

/// Replays queued envelopes per endpoint and records every call. The last
/// envelope queued for an endpoint is repeated; an endpoint with nothing
/// queued answers with an empty list.
#[derive(Default)]
pub struct CannedApi {
    responses: Mutex<HashMap<Endpoint, VecDeque<Value>>>,
    calls: Mutex<Vec<(Endpoint, Query)>>,
}

impl CannedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful envelope whose `response` is `response`.
    pub fn with(self, endpoint: Endpoint, response: Value) -> Self {
        self.with_envelope(
            endpoint,
            json!({ "errors": [], "paging": { "current": 1, "total": 1 }, "response": response }),
        )
    }

    pub fn with_envelope(self, endpoint: Endpoint, envelope: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(envelope);
        self
    }

    pub fn calls(&self) -> Vec<(Endpoint, Query)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The only query sent; panics unless exactly one call was made.
    pub fn single_query(&self) -> (Endpoint, Query) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl FootballApi for CannedApi {
    async fn fetch(&self, endpoint: Endpoint, query: &Query) -> Result<Envelope> {
        self.calls.lock().unwrap().push((endpoint, query.clone()));

        let mut responses = self.responses.lock().unwrap();
        let queue = responses.entry(endpoint).or_default();
        let value = match queue.len() {
            0 => json!({ "errors": [], "response": [] }),
            1 => queue[0].clone(),
            _ => queue.pop_front().unwrap(),
        };

        let envelope: Envelope = serde_json::from_value(value)?;
        match envelope.provider_error() {
            Some(err) => Err(err),
            None => Ok(envelope),
        }
    }
}

/// A fixtures record as the provider returns it.
pub fn fixture_json(
    id: u32,
    status: &str,
    elapsed: Option<u32>,
    home: (u32, &str),
    away: (u32, &str),
    goals: (Option<u32>, Option<u32>),
) -> Value {
    json!({
        "fixture": {
            "id": id,
            "referee": "Michael Oliver",
            "timezone": "UTC",
            "date": "2024-03-10T15:00:00+00:00",
            "timestamp": 1710082800,
            "venue": { "id": 494, "name": "Emirates Stadium", "city": "London" },
            "status": { "long": "irrelevant", "short": status, "elapsed": elapsed }
        },
        "league": {
            "id": 39,
            "name": "Premier League",
            "country": "England",
            "season": 2023,
            "round": "Regular Season - 28"
        },
        "teams": {
            "home": { "id": home.0, "name": home.1, "winner": null },
            "away": { "id": away.0, "name": away.1, "winner": null }
        },
        "goals": { "home": goals.0, "away": goals.1 },
        "score": {
            "halftime": { "home": 1, "away": 0 },
            "fulltime": { "home": goals.0, "away": goals.1 },
            "extratime": { "home": null, "away": null },
            "penalty": { "home": null, "away": null }
        }
    })
}

/// A `players/top*` record playing for `team` in the Premier League 2023.
pub fn top_player_json(
    id: u32,
    name: &str,
    team: (u32, &str),
    goals: Option<u32>,
    assists: Option<u32>,
    yellow: Option<u32>,
) -> Value {
    json!({
        "player": { "id": id, "name": name, "age": 24, "nationality": "England" },
        "statistics": [{
            "team": { "id": team.0, "name": team.1 },
            "league": { "id": 39, "name": "Premier League", "country": "England", "season": 2023 },
            "games": { "appearences": 30, "minutes": 2500, "position": "Attacker" },
            "goals": { "total": goals, "assists": assists },
            "cards": { "yellow": yellow, "red": null }
        }]
    })
}

/// A standings row with distinct all/home/away records.
pub fn standing_row_json(rank: u32, team: (u32, &str), points: i32, home_won: u32) -> Value {
    json!({
        "rank": rank,
        "team": { "id": team.0, "name": team.1 },
        "points": points,
        "goalsDiff": 10,
        "group": "Premier League",
        "form": "WWDLW",
        "description": null,
        "all": { "played": 28, "win": 18, "draw": 4, "lose": 6, "goals": { "for": 60, "against": 50 } },
        "home": { "played": 14, "win": home_won, "draw": 2, "lose": 1, "goals": { "for": 35, "against": 20 } },
        "away": { "played": 14, "win": 7, "draw": 2, "lose": 5, "goals": { "for": 25, "against": 30 } }
    })
}

pub fn standings_json(rows: Vec<Value>) -> Value {
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

pub fn league_json(id: u32, name: &str, country: &str) -> Value {
    json!({
        "league": { "id": id, "name": name, "type": "League" },
        "country": { "name": country, "code": "GB" },
        "seasons": [
            { "year": 2022, "current": false },
            { "year": 2023, "current": true }
        ]
    })
}

pub fn provider_error(key: &str, message: &str) -> Value {
    json!({ "errors": { key: message }, "results": 0, "response": [] })
}

/// Unwrap an error that must be a usage error.
pub fn expect_usage(result: Result<String>) -> String {
    match result {
        Err(SportyError::Usage { message }) => message,
        other => panic!("Expected Usage error, got {:?}", other),
    }
}
