//! Tavily Search API adapter
//!
//! Tavily authenticates with the API key in the request body rather than a
//! header; image results are always excluded.

use crate::{
    error::{SearchError, SearchResult},
    providers::{normalize_published_date, ProviderAdapter, ProviderKind, ProviderRequest},
    summary::truncate,
    types::{ItemMetadata, SearchItem, PLACEHOLDER_SCORE},
};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.tavily.com/search";

#[derive(Debug, Serialize)]
struct TavilyRequest {
    api_key: String,
    query: String,
    max_results: usize,
    include_images: bool,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    published_date: Option<String>,
}

/// Adapter for the Tavily search API.
#[derive(Debug, Clone)]
pub struct TavilyAdapter {
    base_url: String,
}

impl Default for TavilyAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TavilyAdapter {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the endpoint (for tests or proxy deployments)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for TavilyAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Tavily
    }

    async fn search(&self, request: &ProviderRequest) -> SearchResult<Vec<SearchItem>> {
        let client = reqwest::Client::new();

        let body = TavilyRequest {
            api_key: request.api_key.clone(),
            query: request.query.clone(),
            max_results: request.max_results,
            include_images: false,
        };

        let response = client
            .post(&self.base_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::HttpError {
                message: format!("Tavily API request failed ({status})"),
                status_code: Some(status.as_u16()),
                response_body: Some(error_text),
            });
        }

        let tavily_response: TavilyResponse = response.json().await.map_err(|e| {
            SearchError::ParseError(format!("Failed to parse Tavily response: {e}"))
        })?;

        let items = tavily_response
            .results
            .into_iter()
            .take(request.max_results)
            .enumerate()
            .map(|(i, result)| {
                let text = truncate(
                    &result.content.unwrap_or_default(),
                    request.max_snippet_chars,
                );
                let id = match result.id {
                    Some(id) if !id.is_empty() => id,
                    _ => format!("tavily_{i}"),
                };
                SearchItem {
                    id,
                    score: PLACEHOLDER_SCORE,
                    metadata: ItemMetadata {
                        file_name: result.title.unwrap_or_default(),
                        url: result.url.unwrap_or_default(),
                        source: ProviderKind::Tavily.as_str().to_string(),
                        published_date: result
                            .published_date
                            .as_deref()
                            .and_then(normalize_published_date),
                        summary: text.clone(),
                    },
                    text,
                }
            })
            .collect();

        Ok(items)
    }
}
