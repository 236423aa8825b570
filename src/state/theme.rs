//! Theme selection derived from the `theme` preference group.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::Arc;

use crate::error::Error;
use crate::net::types::{PreferenceEntry, PreferenceRecord, ThemeMode, User, UserPreference};
use crate::state::identity::Identity;
use crate::state::preferences::PreferenceStore;

/// Entry key holding the theme value.
pub const THEME_KEY: &str = "theme";

/// The active theme for a record: the `theme` entry's value if present,
/// light otherwise. Total over missing records and entries.
#[must_use]
pub fn compute_theme(record: Option<&PreferenceRecord>) -> ThemeMode {
    record
        .and_then(|record| record.preferences.iter().find(|entry| entry.key == THEME_KEY))
        .map_or(ThemeMode::Light, |entry| ThemeMode::from_value(&entry.value))
}

/// The user's saved theme record, or an unsaved draft when none exists.
///
/// # Errors
///
/// `Precondition` when no user is resolved; theme preferences only
/// exist in an authenticated context.
pub fn theme_preference(
    user: Option<&User>,
    all_preferences: &[UserPreference],
) -> Result<UserPreference, Error> {
    let Some(user) = user else {
        return Err(Error::Precondition("cannot use theme preference without user"));
    };
    let existing = all_preferences
        .iter()
        .find(|preference| matches!(preference, UserPreference::Theme(_)));
    if let Some(existing) = existing {
        return Ok(existing.clone());
    }
    Ok(UserPreference::Theme(PreferenceRecord {
        id: None,
        user: user.id.clone(),
        preferences: Vec::new(),
    }))
}

/// The upsert payload flipping `current`: the record's entries are
/// replaced by the single flipped theme entry. Persisting is the
/// caller's job.
#[must_use]
pub fn toggled_theme_update(current: ThemeMode, mut existing: UserPreference) -> UserPreference {
    existing.record_mut().preferences =
        vec![PreferenceEntry::new(THEME_KEY, current.flipped().as_str())];
    existing
}

/// Stateful wrapper reading the derived theme and persisting toggles.
pub struct ThemeStore {
    identity: Arc<Identity>,
    preferences: Arc<PreferenceStore>,
}

impl ThemeStore {
    #[must_use]
    pub fn new(identity: Arc<Identity>, preferences: Arc<PreferenceStore>) -> Self {
        Self { identity, preferences }
    }

    /// The saved theme record or a draft for the current user.
    ///
    /// # Errors
    ///
    /// `Precondition` without a user; transport failures from the fetch.
    pub async fn preference(&self) -> Result<UserPreference, Error> {
        let user = self.identity.current_user();
        let all = self.preferences.get().await?;
        theme_preference(user.as_ref(), &all)
    }

    /// The currently active theme.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ThemeStore::preference`].
    pub async fn current(&self) -> Result<ThemeMode, Error> {
        let preference = self.preference().await?;
        Ok(compute_theme(Some(preference.record())))
    }

    /// Flip the theme and persist it; the preference cache is refetched
    /// before this resolves, so subsequent reads see the new value.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ThemeStore::preference`], plus transport
    /// failures from the upsert.
    pub async fn toggle(&self) -> Result<(), Error> {
        let preference = self.preference().await?;
        let current = compute_theme(Some(preference.record()));
        self.preferences.upsert(toggled_theme_update(current, preference)).await
    }
}
