//! Unified search item type and its wire representation

use serde::{Deserialize, Serialize};

/// Relevance score assigned to every item.
///
/// A constant placeholder: no provider score is comparable across backends
/// yet, and no ranking heuristic is specified. Kept as a finite float so the
/// wire shape is stable when real scoring lands.
pub const PLACEHOLDER_SCORE: f64 = 12.0;

/// A single search result, normalized across providers.
///
/// Constructed once by a provider adapter, never mutated after the fan-out
/// coordinator attaches its summary, and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Provider-assigned id, or synthesized as `"{provider}_{index}"` when
    /// the provider supplies none. Not globally unique across providers.
    pub id: String,
    /// Truncated snippet content
    pub text: String,
    /// Relevance score; currently always [`PLACEHOLDER_SCORE`]
    pub score: f64,
    /// Fixed-key metadata block
    pub metadata: ItemMetadata,
}

/// Fixed-key metadata attached to every [`SearchItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Display title of the result
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// URL of the result
    pub url: String,
    /// Provider name, one of `exa` / `tavily` / `linkup`
    pub source: String,
    /// Publication date as an ISO-8601 string, when the provider supplied one
    pub published_date: Option<String>,
    /// Short summary derived from the snippet
    pub summary: String,
}

/// Serialize a collection of items to the full-collection wire format
/// (a JSON array of item objects).
pub fn items_to_json(items: &[SearchItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}

/// Parse a full-collection JSON array back into items.
pub fn items_from_json(json: &str) -> serde_json::Result<Vec<SearchItem>> {
    serde_json::from_str(json)
}
