//! Search provider adapters
//!
//! Each backend gets one adapter that translates a generic
//! [`ProviderRequest`] into a provider-specific call and maps the response
//! into [`SearchItem`]s. Adapters are selected by [`ProviderKind`] rather
//! than by runtime type inspection.

pub mod exa;
pub mod linkup;
pub mod tavily;

pub use exa::ExaAdapter;
pub use linkup::LinkupAdapter;
pub use tavily::TavilyAdapter;

use crate::error::{SearchError, SearchResult};
use crate::types::SearchItem;
use std::fmt;
use std::str::FromStr;

/// The supported search backends, in canonical dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Exa,
    Tavily,
    Linkup,
}

impl ProviderKind {
    /// Canonical provider order used when no explicit set is given.
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::Exa,
        ProviderKind::Tavily,
        ProviderKind::Linkup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Exa => "exa",
            ProviderKind::Tavily => "tavily",
            ProviderKind::Linkup => "linkup",
        }
    }

    /// Construct the adapter for this backend.
    pub fn adapter(&self) -> Box<dyn ProviderAdapter> {
        match self {
            ProviderKind::Exa => Box::new(ExaAdapter::new()),
            ProviderKind::Tavily => Box::new(TavilyAdapter::new()),
            ProviderKind::Linkup => Box::new(LinkupAdapter::new()),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exa" => Ok(ProviderKind::Exa),
            "tavily" => Ok(ProviderKind::Tavily),
            "linkup" => Ok(ProviderKind::Linkup),
            other => Err(SearchError::ConfigError(format!(
                "unknown search provider: {other}"
            ))),
        }
    }
}

/// Generic request handed to every adapter.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// The search query text
    pub query: String,
    /// API key for the backend
    pub api_key: String,
    /// Maximum number of items to map from the response
    pub max_results: usize,
    /// Maximum snippet length in characters
    pub max_snippet_chars: usize,
}

/// Trait implemented by every provider adapter.
///
/// Adapters report failures as `Err`; the fan-out coordinator downgrades
/// them to zero items at the dispatch boundary so one dead provider never
/// sinks the whole query.
#[async_trait::async_trait]
pub trait ProviderAdapter: Send + Sync + fmt::Debug {
    /// Which backend this adapter talks to
    fn kind(&self) -> ProviderKind;

    /// Issue one search request and map the response into unified items
    async fn search(&self, request: &ProviderRequest) -> SearchResult<Vec<SearchItem>>;
}

/// Normalize a provider-native date string to ISO-8601.
///
/// RFC 3339 timestamps and plain `YYYY-MM-DD` dates are re-emitted in
/// canonical form; anything else passes through untouched rather than being
/// discarded.
pub(crate) fn normalize_published_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.to_rfc3339());
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.format("%Y-%m-%d").to_string());
    }
    Some(trimmed.to_string())
}
