//! Query layer for the per-user preference set.
//!
//! One cache slot per store: the full preference set for the user it was
//! fetched for. A read refetches when the user changed, after an upsert,
//! after an explicit invalidation, or once the slot is older than the
//! configured staleness window.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::error::Error;
use crate::net::preferences::PreferencesApi;
use crate::net::types::UserPreference;
use crate::state::identity::Identity;

struct CachedSet {
    user_id: String,
    fetched_at: Instant,
    records: Vec<UserPreference>,
}

/// Cached view of the current user's preference records.
pub struct PreferenceStore {
    api: PreferencesApi,
    identity: Arc<Identity>,
    stale_after: Duration,
    cache: RwLock<Option<CachedSet>>,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(api: PreferencesApi, identity: Arc<Identity>, stale_after: Duration) -> Self {
        Self { api, identity, stale_after, cache: RwLock::new(None) }
    }

    // Logged-out reads key the cache on the empty id and fetch an empty
    // set rather than failing.
    fn current_user_id(&self) -> String {
        self.identity.current_user().map_or_else(String::new, |user| user.id)
    }

    /// The preference set for the current user, served from cache while
    /// fresh.
    ///
    /// # Errors
    ///
    /// Propagates transport failures from the refetch path.
    pub async fn get(&self) -> Result<Vec<UserPreference>, Error> {
        let user_id = self.current_user_id();
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.user_id == user_id && cached.fetched_at.elapsed() < self.stale_after {
                    return Ok(cached.records.clone());
                }
            }
        }
        self.refetch().await
    }

    /// Fetch unconditionally and refill the cache slot.
    ///
    /// # Errors
    ///
    /// Propagates transport failures; the previous slot is kept on error.
    pub async fn refetch(&self) -> Result<Vec<UserPreference>, Error> {
        let user_id = self.current_user_id();
        tracing::debug!(user = %user_id, "fetching user preferences");
        let records = self.api.list(&user_id).await?;
        let mut cache = self.cache.write().await;
        *cache = Some(CachedSet {
            user_id,
            fetched_at: Instant::now(),
            records: records.clone(),
        });
        Ok(records)
    }

    /// Submit an upsert, then refetch so subsequent reads observe the
    /// new value.
    ///
    /// # Errors
    ///
    /// Propagates transport failures; nothing is applied locally before
    /// the network call resolves.
    pub async fn upsert(&self, preference: UserPreference) -> Result<(), Error> {
        self.api.upsert(&preference).await?;
        self.refetch().await?;
        Ok(())
    }

    /// Drop the cached slot; the next read fetches.
    pub async fn invalidate(&self) {
        let mut cache = self.cache.write().await;
        *cache = None;
    }
}
