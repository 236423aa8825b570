//! Character directory listing: the filter state drives the query key.

#[cfg(test)]
#[path = "characters_test.rs"]
mod characters_test;

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::error::Error;
use crate::net::characters::CharactersApi;
use crate::net::types::{Character, CharacterFilters};

struct CachedList {
    fetched_at: Instant,
    characters: Vec<Character>,
}

/// Filterable character listing with one cache slot per query key.
pub struct CharacterStore {
    api: CharactersApi,
    stale_after: Duration,
    filters: Mutex<CharacterFilters>,
    cache: RwLock<HashMap<String, CachedList>>,
}

impl CharacterStore {
    #[must_use]
    pub fn new(api: CharactersApi, stale_after: Duration) -> Self {
        Self {
            api,
            stale_after,
            filters: Mutex::new(CharacterFilters::default()),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The active filter set.
    #[must_use]
    pub fn filters(&self) -> CharacterFilters {
        self.filters.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Replace the filter set; the next read uses the new query key.
    pub fn set_filters(&self, filters: CharacterFilters) {
        if let Ok(mut guard) = self.filters.lock() {
            *guard = filters;
        }
    }

    /// The listing for the active filters, served from cache while
    /// fresh and refetched on an unseen or stale query key.
    ///
    /// # Errors
    ///
    /// Propagates transport failures; the cached slot is kept on error.
    pub async fn get(&self) -> Result<Vec<Character>, Error> {
        let filters = self.filters();
        let key = filters.query_key();
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.get(&key) {
                if cached.fetched_at.elapsed() < self.stale_after {
                    return Ok(cached.characters.clone());
                }
            }
        }
        tracing::debug!(key = %key, "fetching characters");
        let characters = self.api.list(&filters).await?;
        let mut cache = self.cache.write().await;
        cache.insert(key, CachedList { fetched_at: Instant::now(), characters: characters.clone() });
        Ok(characters)
    }

    /// Drop every cached listing; the next read fetches.
    pub async fn invalidate(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();
    }
}
