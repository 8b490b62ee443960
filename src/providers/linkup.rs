//! Linkup Search API adapter
//!
//! Linkup never reports a publication date, so `published_date` is always
//! absent on its items.

use crate::{
    error::{SearchError, SearchResult},
    providers::{ProviderAdapter, ProviderKind, ProviderRequest},
    summary::truncate,
    types::{ItemMetadata, SearchItem, PLACEHOLDER_SCORE},
};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.linkup.so/v1/search";

#[derive(Debug, Serialize)]
struct LinkupRequest {
    q: String,
    depth: &'static str,
    #[serde(rename = "outputType")]
    output_type: &'static str,
    #[serde(rename = "includeImages")]
    include_images: bool,
}

#[derive(Debug, Deserialize)]
struct LinkupResponse {
    #[serde(default)]
    results: Vec<LinkupResult>,
}

#[derive(Debug, Deserialize)]
struct LinkupResult {
    #[serde(default)]
    id: Option<String>,
    /// Linkup calls the display title `name`; fall back to `title`
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

/// Adapter for the Linkup search API.
#[derive(Debug, Clone)]
pub struct LinkupAdapter {
    base_url: String,
}

impl Default for LinkupAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkupAdapter {
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
impl ProviderAdapter for LinkupAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Linkup
    }

    async fn search(&self, request: &ProviderRequest) -> SearchResult<Vec<SearchItem>> {
        let client = reqwest::Client::new();

        let body = LinkupRequest {
            q: request.query.clone(),
            depth: "standard",
            output_type: "searchResults",
            include_images: false,
        };

        let response = client
            .post(&self.base_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", request.api_key))
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
                message: format!("Linkup API request failed ({status})"),
                status_code: Some(status.as_u16()),
                response_body: Some(error_text),
            });
        }

        let linkup_response: LinkupResponse = response.json().await.map_err(|e| {
            SearchError::ParseError(format!("Failed to parse Linkup response: {e}"))
        })?;

        let items = linkup_response
            .results
            .into_iter()
            .take(request.max_results)
            .enumerate()
            .map(|(i, result)| {
                let raw_text = result.content.or(result.text).unwrap_or_default();
                let text = truncate(&raw_text, request.max_snippet_chars);
                let id = match result.id {
                    Some(id) if !id.is_empty() => id,
                    _ => format!("linkup_{i}"),
                };
                let file_name = match result.name {
                    Some(name) if !name.is_empty() => name,
                    _ => result.title.unwrap_or_default(),
                };
                SearchItem {
                    id,
                    score: PLACEHOLDER_SCORE,
                    metadata: ItemMetadata {
                        file_name,
                        url: result.url.unwrap_or_default(),
                        source: ProviderKind::Linkup.as_str().to_string(),
                        published_date: None,
                        summary: text.clone(),
                    },
                    text,
                }
            })
            .collect();

        Ok(items)
    }
}
