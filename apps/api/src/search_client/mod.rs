//! Search Client: web and video lookups used during module enrichment.
//!
//! Backed by SerpApi. Only the module enricher talks to this client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const SERPAPI_URL: &str = "https://serpapi.com/search.json";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which result vertical to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    /// Organic web results.
    Web,
    /// Video results.
    Video,
}

/// One search result. Fields are optional because providers omit them freely.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchHit {
    pub title: Option<String>,
    pub link: Option<String>,
}

/// Capability handle for search. Carried in `AppState` as `Arc<dyn SearchProvider>`.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(
        &self,
        query: &str,
        engine: SearchEngine,
    ) -> Result<Vec<SearchHit>, SearchError>;
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SearchHit>,
    #[serde(default)]
    video_results: Vec<SearchHit>,
    error: Option<String>,
}

/// Production `SearchProvider` backed by SerpApi (`google` and `youtube` engines).
#[derive(Clone)]
pub struct SerpApiClient {
    client: Client,
    api_key: String,
}

impl SerpApiClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
        })
    }
}

/// Query-string parameters for one SerpApi call, minus the key.
fn query_params(query: &str, engine: SearchEngine) -> [(&'static str, &str); 2] {
    match engine {
        SearchEngine::Web => [("engine", "google"), ("q", query)],
        SearchEngine::Video => [("engine", "youtube"), ("search_query", query)],
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(
        &self,
        query: &str,
        engine: SearchEngine,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let response = self
            .client
            .get(SERPAPI_URL)
            .query(&query_params(query, engine))
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<SerpApiResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(body);
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SerpApiResponse = serde_json::from_str(&body)?;
        // A 200 with `error` set means "no results" for this query.
        if let Some(note) = &parsed.error {
            debug!("Search {:?} '{}' reported: {}", engine, query, note);
        }

        let hits = match engine {
            SearchEngine::Web => parsed.organic_results,
            SearchEngine::Video => parsed.video_results,
        };
        debug!("Search {:?} '{}' returned {} hits", engine, query, hits.len());

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_query_uses_google_engine() {
        let params = query_params("Rust tutorial or guide", SearchEngine::Web);
        assert_eq!(params[0], ("engine", "google"));
        assert_eq!(params[1], ("q", "Rust tutorial or guide"));
    }

    #[test]
    fn test_video_query_uses_youtube_engine() {
        let params = query_params("Rust tutorial", SearchEngine::Video);
        assert_eq!(params[0], ("engine", "youtube"));
        assert_eq!(params[1], ("search_query", "Rust tutorial"));
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let body = r#"{
            "search_metadata": {"status": "Success"},
            "organic_results": [
                {"position": 1, "title": "The Rust Book", "link": "https://doc.rust-lang.org/book/"},
                {"position": 2, "snippet": "no title or link here"}
            ]
        }"#;
        let parsed: SerpApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.organic_results.len(), 2);
        assert_eq!(parsed.organic_results[0].title.as_deref(), Some("The Rust Book"));
        assert!(parsed.organic_results[1].link.is_none());
        assert!(parsed.video_results.is_empty());
    }
}
