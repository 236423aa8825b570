//! First-time modal gating: one modal at a time, dismissed permanently
//! (persisted) or for the session only.
//!
//! DESIGN
//! ======
//! Per modal and session the states are eligible, permanently dismissed,
//! and temporarily dismissed. Dismissals only accumulate: no transition
//! removes one, and a reload resets only the temporary set.

#[cfg(test)]
#[path = "first_time_modal_test.rs"]
mod first_time_modal_test;

use std::sync::{Arc, Mutex};

use crate::error::Error;
use crate::net::types::{KnownModal, PreferenceEntry, PreferenceRecord, User, UserPreference};
use crate::state::identity::Identity;
use crate::state::preferences::PreferenceStore;

/// Entry value marking a modal as permanently dismissed.
const DISMISSED: &str = "true";

/// The user's saved first-time-modal record, or an unsaved draft when
/// none exists.
///
/// # Errors
///
/// `Precondition` when no user is resolved.
pub fn first_time_modal_preference(
    user: Option<&User>,
    all_preferences: &[UserPreference],
) -> Result<UserPreference, Error> {
    let Some(user) = user else {
        return Err(Error::Precondition(
            "cannot use first time modal preference without user",
        ));
    };
    let existing = all_preferences
        .iter()
        .find(|preference| matches!(preference, UserPreference::FirstTimeModal(_)));
    if let Some(existing) = existing {
        return Ok(existing.clone());
    }
    Ok(UserPreference::FirstTimeModal(PreferenceRecord {
        id: None,
        user: user.id.clone(),
        preferences: Vec::new(),
    }))
}

/// The single modal to show right now, or `None`.
///
/// Nothing is shown while the preference set is still loading, so a
/// modal never flashes before its dismissal state is known. Otherwise
/// the known modals are scanned in precedence order and the first one
/// that is neither permanently nor temporarily dismissed wins.
#[must_use]
pub fn currently_opened_modal(
    is_loading: bool,
    preference: &PreferenceRecord,
    temporarily_closed: &[KnownModal],
) -> Option<KnownModal> {
    if is_loading {
        return None;
    }
    KnownModal::ALL.into_iter().find(|modal| {
        let dismissed_forever = preference
            .preferences
            .iter()
            .any(|entry| entry.key == modal.as_str() && entry.value == DISMISSED);
        !dismissed_forever && !temporarily_closed.contains(modal)
    })
}

/// The upsert payload dismissing `modal` permanently: one entry
/// appended, existing entries untouched. Repeated calls for the same
/// modal append redundant entries; the scan above treats them the same.
#[must_use]
pub fn close_forever_update(modal: KnownModal, mut existing: UserPreference) -> UserPreference {
    existing
        .record_mut()
        .preferences
        .push(PreferenceEntry::new(modal.as_str(), DISMISSED));
    existing
}

/// How a permanent dismissal affects the rest of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CloseMode {
    /// Each remaining modal may still be shown this session.
    #[default]
    ShowEach,
    /// Permanently dismissing any modal suppresses every modal for the
    /// remainder of the session.
    OnlyShowOne,
}

/// Session-scoped modal gate over the preference query layer.
pub struct FirstTimeModalStore {
    identity: Arc<Identity>,
    preferences: Arc<PreferenceStore>,
    close_mode: CloseMode,
    temporarily_closed: Mutex<Vec<KnownModal>>,
}

impl FirstTimeModalStore {
    #[must_use]
    pub fn new(
        identity: Arc<Identity>,
        preferences: Arc<PreferenceStore>,
        close_mode: CloseMode,
    ) -> Self {
        Self { identity, preferences, close_mode, temporarily_closed: Mutex::new(Vec::new()) }
    }

    /// The saved first-time-modal record or a draft for the current user.
    ///
    /// # Errors
    ///
    /// `Precondition` without a user; transport failures from the fetch.
    pub async fn preference(&self) -> Result<UserPreference, Error> {
        let user = self.identity.current_user();
        let all = self.preferences.get().await?;
        first_time_modal_preference(user.as_ref(), &all)
    }

    /// Modals temporarily closed this session.
    #[must_use]
    pub fn temporarily_closed(&self) -> Vec<KnownModal> {
        self.temporarily_closed.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// The modal to show right now. The preference set is awaited, so by
    /// the time this resolves loading is over.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FirstTimeModalStore::preference`].
    pub async fn current_modal(&self) -> Result<Option<KnownModal>, Error> {
        let preference = self.preference().await?;
        Ok(currently_opened_modal(false, preference.record(), &self.temporarily_closed()))
    }

    /// Persist a permanent dismissal. Under [`CloseMode::OnlyShowOne`]
    /// every known modal is then suppressed for the session, even those
    /// never individually dismissed.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FirstTimeModalStore::preference`], plus
    /// transport failures from the upsert. The transient set is only
    /// touched after the upsert resolves.
    pub async fn close_forever(&self, modal: KnownModal) -> Result<(), Error> {
        let preference = self.preference().await?;
        self.preferences.upsert(close_forever_update(modal, preference)).await?;
        if self.close_mode == CloseMode::OnlyShowOne {
            if let Ok(mut guard) = self.temporarily_closed.lock() {
                *guard = KnownModal::ALL.to_vec();
            }
        }
        Ok(())
    }

    /// Session-only dismissal: local state change, no network call.
    pub fn close_temporarily(&self, modal: KnownModal) {
        if let Ok(mut guard) = self.temporarily_closed.lock() {
            guard.push(modal);
        }
    }
}
