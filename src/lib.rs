//! # internet-search
//!
//! Federated internet search: queries multiple independent search providers
//! (Exa, Tavily, Linkup) concurrently, normalizes their heterogeneous result
//! formats into a single [`SearchItem`] shape, deduplicates across
//! providers, and returns a unified list with auto-generated summaries.
//!
//! The call succeeds as long as at least one provider produces results; a
//! dead or misconfigured provider is logged and skipped, never fatal on its
//! own.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use internet_search::search_online;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API keys and tunables come from INTERNET_SEARCH_* env vars
//!     let items = search_online("rust async runtimes").await?;
//!
//!     for item in items {
//!         println!("[{}] {}", item.metadata.source, item.metadata.file_name);
//!         println!("    {}", item.metadata.summary);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Lower-level control (explicit provider sets, custom caps, injected
//! adapters) lives in the [`fanout`] module.

pub mod config;
pub mod error;
pub mod fanout;
pub mod providers;
pub mod summary;
pub mod types;

// Re-export common types
pub use config::SearchConfig;
pub use error::{SearchError, SearchFailed, SearchResult};
pub use fanout::{search_all, FanoutOptions};
pub use providers::ProviderKind;
pub use types::{ItemMetadata, SearchItem};

/// Search the internet for the given query across all configured providers.
///
/// Resolves API keys and tunables from the environment, always requests all
/// three providers (ones without a configured key are silently skipped) and
/// returns the merged, deduplicated items.
///
/// This is the single externally visible boundary: any internal failure,
/// including "all providers failed", is logged and replaced with the opaque
/// [`SearchFailed`] error.
pub async fn search_online(query: &str) -> Result<Vec<SearchItem>, SearchFailed> {
    let config = SearchConfig::from_env().map_err(|error| {
        log::error!("internet search configuration failed: {error}");
        SearchFailed
    })?;

    let options = FanoutOptions {
        query: query.to_string(),
        api_keys: config.api_keys(),
        providers: Some(ProviderKind::ALL.to_vec()),
        max_results_per_provider: config.max_results_per_provider,
        max_summary_chars: config.max_summary_chars,
        ..Default::default()
    };

    fanout::search_all(&options).await.map_err(|error| {
        log::error!("internet search failed: {error}");
        SearchFailed
    })
}
