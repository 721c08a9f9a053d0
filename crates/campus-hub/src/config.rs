//! # Configuration
//!
//! Defaults overlaid with `CAMPUS_HUB_*` environment variables. Nested keys
//! use a double underscore, so the suggestion API key is read from
//! `CAMPUS_HUB_SUGGESTION__API_KEY`. A `.env` file in the working directory
//! is loaded first when present.

use crate::suggestion::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
use config::{Config, ConfigError, Environment};
use secrecy::SecretString;
use serde::Deserialize;
use std::collections::HashMap;

const ENV_PREFIX: &str = "CAMPUS_HUB";

/// Settings for the whole hub.
#[derive(Debug)]
pub struct HubConfig {
    /// Default `tracing` directive when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Request channel capacity of each actor.
    pub actor_buffer: usize,
    pub suggestion: SuggestionConfig,
}

#[derive(Debug)]
pub struct SuggestionConfig {
    /// Without a key the suggestion feature is unavailable.
    pub api_key: Option<SecretString>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Deserialize)]
struct RawHubConfig {
    log_filter: String,
    actor_buffer: usize,
    suggestion: RawSuggestionConfig,
}

#[derive(Deserialize)]
struct RawSuggestionConfig {
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

impl HubConfig {
    /// Loads `.env` (if any) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::build(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads from an explicit variable map instead of the process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::build(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        let raw: RawHubConfig = Config::builder()
            .set_default("log_filter", "info")?
            .set_default("actor_buffer", 32)?
            .set_default("suggestion.model", DEFAULT_MODEL)?
            .set_default("suggestion.base_url", DEFAULT_BASE_URL)?
            .set_default("suggestion.timeout_secs", DEFAULT_TIMEOUT.as_secs() as i64)?
            .add_source(env.prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()?;

        if raw.actor_buffer == 0 {
            return Err(ConfigError::Message("actor_buffer must be at least 1".into()));
        }

        let api_key = raw
            .suggestion
            .api_key
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from);

        Ok(Self {
            log_filter: raw.log_filter,
            actor_buffer: raw.actor_buffer,
            suggestion: SuggestionConfig {
                api_key,
                model: raw.suggestion.model,
                base_url: raw.suggestion.base_url,
                timeout_secs: raw.suggestion.timeout_secs,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = HubConfig::from_vars(HashMap::new()).unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.actor_buffer, 32);
        assert!(config.suggestion.api_key.is_none());
        assert_eq!(config.suggestion.model, DEFAULT_MODEL);
        assert_eq!(config.suggestion.timeout_secs, 20);
    }

    #[test]
    fn test_environment_overrides_nested_keys() {
        let config = HubConfig::from_vars(vars(&[
            ("CAMPUS_HUB_LOG_FILTER", "campus_hub=debug"),
            ("CAMPUS_HUB_ACTOR_BUFFER", "8"),
            ("CAMPUS_HUB_SUGGESTION__API_KEY", "AIza-test"),
            ("CAMPUS_HUB_SUGGESTION__TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "campus_hub=debug");
        assert_eq!(config.actor_buffer, 8);
        assert_eq!(config.suggestion.timeout_secs, 5);
        let key = config.suggestion.api_key.unwrap();
        assert_eq!(key.expose_secret(), "AIza-test");
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config =
            HubConfig::from_vars(vars(&[("CAMPUS_HUB_SUGGESTION__API_KEY", "  ")])).unwrap();
        assert!(config.suggestion.api_key.is_none());
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        assert!(HubConfig::from_vars(vars(&[("CAMPUS_HUB_ACTOR_BUFFER", "0")])).is_err());
    }

    #[test]
    fn test_debug_output_redacts_the_key() {
        let config =
            HubConfig::from_vars(vars(&[("CAMPUS_HUB_SUGGESTION__API_KEY", "AIza-hidden")])).unwrap();
        assert!(!format!("{:?}", config).contains("AIza-hidden"));
    }
}
