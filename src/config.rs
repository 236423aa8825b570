//! Service endpoints and cache tuning loaded from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Cached query results are considered fresh for this long.
const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(5 * 60);

/// Endpoints and cache staleness shared by every store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the preferences service.
    pub preferences_base_url: String,
    /// Base URL of the third-party character catalog.
    pub characters_base_url: String,
    /// How long cached query results are served without a refetch.
    pub stale_after: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preferences_base_url: "http://localhost:3000".to_owned(),
            characters_base_url: "https://rickandmortyapi.com".to_owned(),
            stale_after: DEFAULT_STALE_AFTER,
        }
    }
}

impl Config {
    /// Load overrides from `WALLETFRONT_PREFERENCES_URL` and
    /// `WALLETFRONT_CHARACTERS_URL`; missing variables keep the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("WALLETFRONT_PREFERENCES_URL") {
            config.preferences_base_url = url;
        }
        if let Ok(url) = std::env::var("WALLETFRONT_CHARACTERS_URL") {
            config.characters_base_url = url;
        }
        config
    }
}
