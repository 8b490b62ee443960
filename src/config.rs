//! Host configuration resolution
//!
//! The host supplies API keys and tunables through the environment; there
//! are no CLI flags for them. An absent or empty API key means the provider
//! is disabled, which the fan-out coordinator handles by skipping it.

use crate::error::{SearchError, SearchResult};
use crate::fanout::{DEFAULT_MAX_RESULTS_PER_PROVIDER, DEFAULT_MAX_SUMMARY_CHARS};
use crate::providers::ProviderKind;
use std::collections::HashMap;
use std::env;

pub const ENV_API_KEY_EXA: &str = "INTERNET_SEARCH_API_KEY_EXA";
pub const ENV_API_KEY_TAVILY: &str = "INTERNET_SEARCH_API_KEY_TAVILY";
pub const ENV_API_KEY_LINKUP: &str = "INTERNET_SEARCH_API_KEY_LINKUP";
pub const ENV_MAX_RESULTS_PER_PROVIDER: &str = "INTERNET_SEARCH_MAX_RESULTS_PER_PROVIDER";
pub const ENV_SUMMARY_LENGTH: &str = "INTERNET_SEARCH_SUMMARY_LENGTH";

/// Resolved host configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub exa_api_key: String,
    pub tavily_api_key: String,
    pub linkup_api_key: String,
    pub max_results_per_provider: usize,
    pub max_summary_chars: usize,
}

impl SearchConfig {
    /// Resolve configuration from the environment.
    ///
    /// Missing keys resolve to empty strings (provider disabled); malformed
    /// integer tunables are configuration errors.
    pub fn from_env() -> SearchResult<Self> {
        Ok(Self {
            exa_api_key: env::var(ENV_API_KEY_EXA).unwrap_or_default(),
            tavily_api_key: env::var(ENV_API_KEY_TAVILY).unwrap_or_default(),
            linkup_api_key: env::var(ENV_API_KEY_LINKUP).unwrap_or_default(),
            max_results_per_provider: positive_int(
                ENV_MAX_RESULTS_PER_PROVIDER,
                DEFAULT_MAX_RESULTS_PER_PROVIDER,
            )?,
            max_summary_chars: positive_int(ENV_SUMMARY_LENGTH, DEFAULT_MAX_SUMMARY_CHARS)?,
        })
    }

    /// Per-provider API key map for the fan-out coordinator.
    pub fn api_keys(&self) -> HashMap<ProviderKind, String> {
        HashMap::from([
            (ProviderKind::Exa, self.exa_api_key.clone()),
            (ProviderKind::Tavily, self.tavily_api_key.clone()),
            (ProviderKind::Linkup, self.linkup_api_key.clone()),
        ])
    }
}

fn positive_int(var: &str, default: usize) -> SearchResult<usize> {
    match env::var(var) {
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(SearchError::ConfigError(format!("{var}: {e}"))),
        Ok(raw) if raw.is_empty() => Ok(default),
        Ok(raw) => match raw.parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            Ok(_) => Err(SearchError::ConfigError(format!(
                "{var} must be a positive integer"
            ))),
            Err(e) => Err(SearchError::ConfigError(format!("{var}: {e}"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            ENV_API_KEY_EXA,
            ENV_API_KEY_TAVILY,
            ENV_API_KEY_LINKUP,
            ENV_MAX_RESULTS_PER_PROVIDER,
            ENV_SUMMARY_LENGTH,
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_empty() {
        clear_env();
        let config = SearchConfig::from_env().unwrap();
        assert!(config.exa_api_key.is_empty());
        assert_eq!(
            config.max_results_per_provider,
            DEFAULT_MAX_RESULTS_PER_PROVIDER
        );
        assert_eq!(config.max_summary_chars, DEFAULT_MAX_SUMMARY_CHARS);
    }

    #[test]
    #[serial]
    fn keys_and_tunables_resolve_from_env() {
        clear_env();
        env::set_var(ENV_API_KEY_TAVILY, "tvly-test");
        env::set_var(ENV_MAX_RESULTS_PER_PROVIDER, "7");
        let config = SearchConfig::from_env().unwrap();
        assert_eq!(config.tavily_api_key, "tvly-test");
        assert_eq!(config.max_results_per_provider, 7);
        assert_eq!(
            config.api_keys().get(&ProviderKind::Tavily).unwrap(),
            "tvly-test"
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn malformed_tunable_is_a_config_error() {
        clear_env();
        env::set_var(ENV_SUMMARY_LENGTH, "not-a-number");
        let err = SearchConfig::from_env().unwrap_err();
        assert!(matches!(err, SearchError::ConfigError(_)));
        clear_env();
    }

    #[test]
    #[serial]
    fn zero_tunable_is_rejected() {
        clear_env();
        env::set_var(ENV_MAX_RESULTS_PER_PROVIDER, "0");
        assert!(SearchConfig::from_env().is_err());
        clear_env();
    }
}
