//! Concurrent multi-provider fan-out and result reconciliation
//!
//! One task per active provider, dispatched concurrently and joined as a
//! group; per-provider failures are downgraded to zero items at the dispatch
//! boundary. The call fails only when every attempted provider came back
//! empty. Order across providers is not part of the contract; order within
//! one provider's results is preserved.

use crate::{
    error::{SearchError, SearchResult},
    providers::{ProviderAdapter, ProviderKind, ProviderRequest},
    summary::{summarize, MAX_SUMMARY_SENTENCES},
    types::SearchItem,
};
use futures::future::join_all;
use std::collections::{HashMap, HashSet};

/// Default snippet cap in characters
pub const DEFAULT_MAX_SNIPPET_CHARS: usize = 500;
/// Default summary cap in characters
pub const DEFAULT_MAX_SUMMARY_CHARS: usize = 300;
/// Default per-provider result cap
pub const DEFAULT_MAX_RESULTS_PER_PROVIDER: usize = 5;

/// Options for one fan-out invocation.
#[derive(Debug, Clone)]
pub struct FanoutOptions {
    /// The search query text
    pub query: String,
    /// API key per provider; an absent or empty key disables the provider
    pub api_keys: HashMap<ProviderKind, String>,
    /// Explicit provider set. `None` falls back to every provider in
    /// canonical order that has a key; `Some(vec![])` means zero providers
    /// and yields an empty result without error.
    pub providers: Option<Vec<ProviderKind>>,
    /// Per-provider result cap
    pub max_results_per_provider: usize,
    /// Snippet cap in characters
    pub max_snippet_chars: usize,
    /// Summary cap in characters
    pub max_summary_chars: usize,
}

impl Default for FanoutOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            api_keys: HashMap::new(),
            providers: None,
            max_results_per_provider: DEFAULT_MAX_RESULTS_PER_PROVIDER,
            max_snippet_chars: DEFAULT_MAX_SNIPPET_CHARS,
            max_summary_chars: DEFAULT_MAX_SUMMARY_CHARS,
        }
    }
}

/// Run the query against every active provider and reconcile the results.
///
/// Fails with [`SearchError::AllProvidersFailed`] only when at least one
/// provider was attempted and none produced items.
pub async fn search_all(options: &FanoutOptions) -> SearchResult<Vec<SearchItem>> {
    let adapters: Vec<Box<dyn ProviderAdapter>> = active_providers(options)
        .into_iter()
        .map(|kind| kind.adapter())
        .collect();
    search_with_adapters(adapters, options).await
}

/// Fan out over an explicit adapter list.
///
/// Seam for callers (and tests) that supply their own adapters; adapter
/// API keys are still looked up per [`ProviderAdapter::kind`].
pub async fn search_with_adapters(
    adapters: Vec<Box<dyn ProviderAdapter>>,
    options: &FanoutOptions,
) -> SearchResult<Vec<SearchItem>> {
    let outcomes = join_all(adapters.iter().map(|adapter| async move {
        let kind = adapter.kind();
        let request = ProviderRequest {
            query: options.query.clone(),
            api_key: options.api_keys.get(&kind).cloned().unwrap_or_default(),
            max_results: options.max_results_per_provider,
            max_snippet_chars: options.max_snippet_chars,
        };
        let mut items = run_adapter(adapter.as_ref(), &request).await;
        for item in &mut items {
            item.metadata.summary = summarize(
                &item.text,
                MAX_SUMMARY_SENTENCES,
                options.max_summary_chars,
            );
        }
        (kind, items)
    }))
    .await;

    let mut merged: Vec<SearchItem> = Vec::new();
    let mut failed: Vec<String> = Vec::new();
    for (kind, mut items) in outcomes {
        if items.is_empty() {
            failed.push(kind.as_str().to_string());
        } else {
            merged.append(&mut items);
        }
    }

    if merged.is_empty() && !failed.is_empty() {
        return Err(SearchError::AllProvidersFailed { providers: failed });
    }

    Ok(dedup_items(merged))
}

/// Resolve the active provider set.
///
/// An explicit list is taken as-is; otherwise every provider in canonical
/// order is a candidate. Either way, providers without a non-empty API key
/// are skipped.
fn active_providers(options: &FanoutOptions) -> Vec<ProviderKind> {
    let candidates: Vec<ProviderKind> = match &options.providers {
        Some(list) => list.clone(),
        None => ProviderKind::ALL.to_vec(),
    };
    candidates
        .into_iter()
        .filter(|kind| {
            options
                .api_keys
                .get(kind)
                .is_some_and(|key| !key.is_empty())
        })
        .collect()
}

/// Isolation boundary: any adapter failure becomes zero items plus a
/// logged warning, never a propagated error.
async fn run_adapter(adapter: &dyn ProviderAdapter, request: &ProviderRequest) -> Vec<SearchItem> {
    match adapter.search(request).await {
        Ok(items) => items,
        Err(error) => {
            log::warn!("search provider {} failed: {error}", adapter.kind());
            Vec::new()
        }
    }
}

/// Collapse duplicates in encounter order.
///
/// The identity key is the first of trimmed `metadata.url`,
/// `metadata.fileName` and `id` that is non-empty; the first occurrence of a
/// key wins. Items with no usable key are dropped. Idempotent.
pub fn dedup_items(items: Vec<SearchItem>) -> Vec<SearchItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut deduped = Vec::with_capacity(items.len());
    for item in items {
        let key = [
            item.metadata.url.as_str(),
            item.metadata.file_name.as_str(),
            item.id.as_str(),
        ]
        .into_iter()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty());
        match key {
            Some(key) if seen.insert(key.to_string()) => deduped.push(item),
            _ => {}
        }
    }
    deduped
}
