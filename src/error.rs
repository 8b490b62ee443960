//! Error types for federated internet search

use thiserror::Error;

/// Result type alias for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Internal error taxonomy.
///
/// None of these variants crosses the [`crate::search_online`] boundary;
/// they exist so that adapters and the fan-out coordinator can distinguish
/// failure causes in logs.
#[derive(Error, Debug, Clone)]
pub enum SearchError {
    /// HTTP request failed
    #[error("HTTP request failed: {message}")]
    HttpError {
        message: String,
        status_code: Option<u16>,
        response_body: Option<String>,
    },

    /// Provider-specific error (malformed response, rejected request)
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Parsing error (JSON)
    #[error("Parsing error: {0}")]
    ParseError(String),

    /// Every attempted provider yielded zero results.
    ///
    /// Carries the attempted provider names for diagnostic logging; only
    /// fires when at least one provider was attempted.
    #[error("all search providers failed: {}", providers.join(", "))]
    AllProvidersFailed { providers: Vec<String> },
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        SearchError::HttpError {
            message: error.to_string(),
            status_code: error.status().map(|s| s.as_u16()),
            response_body: None,
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(error: serde_json::Error) -> Self {
        SearchError::ParseError(format!("JSON parsing failed: {error}"))
    }
}

/// The only error shape callers of [`crate::search_online`] ever observe.
///
/// Deliberately opaque: a fixed message, no provider identities, no inner
/// cause. The originating [`SearchError`] is logged at the entry point and
/// goes no further.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("internet search failed")]
pub struct SearchFailed;
