//! Facade wiring the HTTP clients, identity provider, and stores.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use crate::config::Config;
use crate::net::characters::CharactersApi;
use crate::net::preferences::PreferencesApi;
use crate::net::types::User;
use crate::state::characters::CharacterStore;
use crate::state::first_time_modal::{CloseMode, FirstTimeModalStore};
use crate::state::identity::{Identity, UserIdStore};
use crate::state::preferences::PreferenceStore;
use crate::state::theme::ThemeStore;

/// Everything a UI host needs, built from one configuration and an
/// injected user-id store.
pub struct App {
    pub identity: Arc<Identity>,
    pub preferences: Arc<PreferenceStore>,
    pub theme: ThemeStore,
    pub first_time_modal: FirstTimeModalStore,
    pub characters: CharacterStore,
}

impl App {
    #[must_use]
    pub fn new(config: &Config, store: Box<dyn UserIdStore>, close_mode: CloseMode) -> Self {
        let http = reqwest::Client::new();
        let identity = Arc::new(Identity::new(store));
        let preferences = Arc::new(PreferenceStore::new(
            PreferencesApi::new(http.clone(), config.preferences_base_url.clone()),
            Arc::clone(&identity),
            config.stale_after,
        ));
        Self {
            theme: ThemeStore::new(Arc::clone(&identity), Arc::clone(&preferences)),
            first_time_modal: FirstTimeModalStore::new(
                Arc::clone(&identity),
                Arc::clone(&preferences),
                close_mode,
            ),
            characters: CharacterStore::new(
                CharactersApi::new(http, config.characters_base_url.clone()),
                config.stale_after,
            ),
            identity,
            preferences,
        }
    }

    /// Log in and drop preference data cached for the previous identity.
    pub async fn login(&self, id: &str) -> User {
        let user = self.identity.login(id);
        self.preferences.invalidate().await;
        user
    }

    /// Log out: clear the persisted identity and treat every cached
    /// query result as stale.
    pub async fn logout(&self) {
        self.identity.logout();
        self.preferences.invalidate().await;
        self.characters.invalidate().await;
    }
}
