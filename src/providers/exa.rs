//! Exa Search API adapter

use crate::{
    error::{SearchError, SearchResult},
    providers::{normalize_published_date, ProviderAdapter, ProviderKind, ProviderRequest},
    summary::truncate,
    types::{ItemMetadata, SearchItem, PLACEHOLDER_SCORE},
};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.exa.ai/search";

/// Content characters requested from Exa per result; the snippet is cut
/// down further by `max_snippet_chars` after mapping.
const CONTENT_MAX_CHARACTERS: u32 = 2000;

#[derive(Debug, Serialize)]
struct ExaRequest {
    query: String,
    #[serde(rename = "numResults")]
    num_results: usize,
    /// Request freshly-crawled content
    livecrawl: &'static str,
    contents: ExaContents,
}

#[derive(Debug, Serialize)]
struct ExaContents {
    text: ExaTextOptions,
}

#[derive(Debug, Serialize)]
struct ExaTextOptions {
    #[serde(rename = "maxCharacters")]
    max_characters: u32,
}

#[derive(Debug, Deserialize)]
struct ExaResponse {
    #[serde(default)]
    results: Vec<ExaResult>,
}

#[derive(Debug, Deserialize)]
struct ExaResult {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    text: Option<String>,
    /// Older responses carry the body under `content` instead of `text`
    #[serde(default)]
    content: Option<String>,
    #[serde(rename = "publishedDate", default)]
    published_date: Option<String>,
}

/// Adapter for the Exa search API.
#[derive(Debug, Clone)]
pub struct ExaAdapter {
    base_url: String,
}

impl Default for ExaAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExaAdapter {
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
impl ProviderAdapter for ExaAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Exa
    }

    async fn search(&self, request: &ProviderRequest) -> SearchResult<Vec<SearchItem>> {
        let client = reqwest::Client::new();

        let body = ExaRequest {
            query: request.query.clone(),
            num_results: request.max_results,
            livecrawl: "always",
            contents: ExaContents {
                text: ExaTextOptions {
                    max_characters: CONTENT_MAX_CHARACTERS,
                },
            },
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
                message: format!("Exa API request failed ({status})"),
                status_code: Some(status.as_u16()),
                response_body: Some(error_text),
            });
        }

        let exa_response: ExaResponse = response
            .json()
            .await
            .map_err(|e| SearchError::ParseError(format!("Failed to parse Exa response: {e}")))?;

        let items = exa_response
            .results
            .into_iter()
            .take(request.max_results)
            .enumerate()
            .map(|(i, result)| {
                let raw_text = result.text.or(result.content).unwrap_or_default();
                let text = truncate(&raw_text, request.max_snippet_chars);
                let id = match result.id {
                    Some(id) if !id.is_empty() => id,
                    _ => format!("exa_{i}"),
                };
                SearchItem {
                    id,
                    score: PLACEHOLDER_SCORE,
                    metadata: ItemMetadata {
                        file_name: result.title.unwrap_or_default(),
                        url: result.url.unwrap_or_default(),
                        source: ProviderKind::Exa.as_str().to_string(),
                        published_date: result
                            .published_date
                            .as_deref()
                            .and_then(normalize_published_date),
                        // Placeholder; the coordinator overwrites this with
                        // the derived summary.
                        summary: text.clone(),
                    },
                    text,
                }
            })
            .collect();

        Ok(items)
    }
}
