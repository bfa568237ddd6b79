//! HTTP access to the API-Football v3 REST API.
//!
//! Every call is a single GET with the `x-apisports-key` header. Transport
//! failures, HTTP error statuses and the provider's in-band `errors` field
//! are all turned into [`SportyError`] variants here, so callers only ever
//! see a successful [`Envelope`].

use std::{collections::BTreeMap, fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::{Result, SportyError},
    API_KEY_ENV_VAR,
};

#[cfg(test)]
mod tests;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-apisports-key";

/// Upper bound on pages fetched for one paginated query.
pub const MAX_PAGES: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Fixtures,
    FixtureLineups,
    FixtureStatistics,
    Standings,
    Teams,
    TeamStatistics,
    Leagues,
    Players,
    TopScorers,
    TopAssists,
    TopYellowCards,
    TopRedCards,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Fixtures => "fixtures",
            Endpoint::FixtureLineups => "fixtures/lineups",
            Endpoint::FixtureStatistics => "fixtures/statistics",
            Endpoint::Standings => "standings",
            Endpoint::Teams => "teams",
            Endpoint::TeamStatistics => "teams/statistics",
            Endpoint::Leagues => "leagues",
            Endpoint::Players => "players",
            Endpoint::TopScorers => "players/topscorers",
            Endpoint::TopAssists => "players/topassists",
            Endpoint::TopYellowCards => "players/topyellowcards",
            Endpoint::TopRedCards => "players/topredcards",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Query-string parameters, kept sorted by name. Values are passed to the
/// provider as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(BTreeMap<String, String>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    /// Add `name` only when a value is present.
    pub fn opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.param(name, v),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    fn pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Paging {
    pub current: u32,
    pub total: u32,
}

/// The provider's response wrapper. `errors` is `[]` or `{}` when the call
/// succeeded.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub errors: Value,
    #[serde(default)]
    pub results: Option<u32>,
    #[serde(default)]
    pub paging: Option<Paging>,
    #[serde(default)]
    pub response: Value,
}

impl Envelope {
    /// Error reported in-band by the provider, if any.
    pub fn provider_error(&self) -> Option<SportyError> {
        classify_provider_errors(&self.errors)
    }

    /// Deserialize `response` as a list. A lone object becomes a one-element
    /// list; null becomes an empty one.
    pub fn into_list<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        match self.response {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(SportyError::from))
                .collect(),
            other => Ok(vec![serde_json::from_value(other)?]),
        }
    }
}

/// Seam between command handlers and the network.
#[async_trait]
pub trait FootballApi: Send + Sync {
    /// Perform one GET against `endpoint`.
    async fn fetch(&self, endpoint: Endpoint, query: &Query) -> Result<Envelope>;
}

/// Fetch every page of a paginated endpoint as one logical query, starting
/// at page 1. Stops at the provider's `paging.total` or [`MAX_PAGES`]. Any
/// failing page fails the whole query.
pub async fn fetch_all_pages<A, T>(api: &A, endpoint: Endpoint, query: &Query) -> Result<Vec<T>>
where
    A: FootballApi + ?Sized,
    T: DeserializeOwned,
{
    let mut items = Vec::new();
    let mut page = 1;
    loop {
        let envelope = api
            .fetch(endpoint, &query.clone().param("page", page))
            .await?;
        let total = envelope.paging.map(|p| p.total).unwrap_or(1);
        items.extend(envelope.into_list::<T>()?);

        if page >= total {
            break;
        }
        if page >= MAX_PAGES {
            warn!(
                "{} reported {} pages; stopping after {}",
                endpoint, total, MAX_PAGES
            );
            break;
        }
        page += 1;
    }
    Ok(items)
}

/// reqwest-backed [`FootballApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sporty/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url(), config.api_key.clone(), config.timeout())
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    fn headers(&self) -> Result<HeaderMap> {
        // Checked here rather than at startup so usage errors win.
        let key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| SportyError::Auth {
                message: format!(
                    "no API key configured; set {} or run `sporty config set-api-key`",
                    API_KEY_ENV_VAR
                ),
            })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut value = HeaderValue::from_str(key)?;
        value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, value);
        Ok(headers)
    }
}

#[async_trait]
impl FootballApi for ApiClient {
    async fn fetch(&self, endpoint: Endpoint, query: &Query) -> Result<Envelope> {
        let headers = self.headers()?;
        let url = self.url(endpoint);
        debug!(url = %url, query = ?query.pairs(), "GET");

        let res = self
            .client
            .get(&url)
            .headers(headers)
            .query(&query.pairs())
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        let envelope: Envelope = serde_json::from_slice(&body)?;
        if let Some(err) = envelope.provider_error() {
            return Err(err);
        }
        Ok(envelope)
    }
}

/// Map a non-2xx response to an error, using the provider's message when
/// the body carries one.
fn status_error(status: u16, body: &[u8]) -> SportyError {
    let message = error_message_from_body(body).unwrap_or_else(|| {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("request failed")
            .to_string()
    });

    match status {
        401 | 403 => SportyError::Auth { message },
        429 => SportyError::RateLimit { message },
        _ => SportyError::Provider {
            status: Some(status),
            message,
        },
    }
}

fn error_message_from_body(body: &[u8]) -> Option<String> {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        if let Some(errors) = value.get("errors") {
            let entries = error_entries(errors);
            if !entries.is_empty() {
                return Some(join_messages(&entries));
            }
        }
        if let Some(msg) = value.get("message").and_then(Value::as_str) {
            return Some(msg.to_string());
        }
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    (!text.is_empty()).then(|| text.chars().take(200).collect())
}

/// Classify the provider's `errors` field. Returns `None` for `[]`, `{}` or
/// null.
pub(crate) fn classify_provider_errors(errors: &Value) -> Option<SportyError> {
    let entries = error_entries(errors);
    if entries.is_empty() {
        return None;
    }
    let message = join_messages(&entries);

    let has_key = |names: &[&str]| entries.iter().any(|(k, _)| names.contains(&k.as_str()));
    if has_key(&["token"]) {
        return Some(SportyError::Auth { message });
    }
    if has_key(&["requests", "rateLimit"]) {
        return Some(SportyError::RateLimit { message });
    }

    let lower = message.to_lowercase();
    if lower.contains("api key") || lower.contains("token") {
        Some(SportyError::Auth { message })
    } else if lower.contains("rate limit") || lower.contains("too many requests") {
        Some(SportyError::RateLimit { message })
    } else {
        Some(SportyError::Provider {
            status: None,
            message,
        })
    }
}

fn error_entries(errors: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    match errors {
        Value::Object(map) => {
            for (k, v) in map {
                out.push((k.clone(), value_text(v)));
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(map) => {
                        for (k, v) in map {
                            out.push((k.clone(), value_text(v)));
                        }
                    }
                    other => out.push((String::new(), value_text(other))),
                }
            }
        }
        Value::String(s) => out.push((String::new(), s.clone())),
        _ => {}
    }
    out.retain(|(_, msg)| !msg.trim().is_empty());
    out
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn join_messages(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(_, msg)| msg.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
