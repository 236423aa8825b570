//! Wire types shared by the HTTP clients and the state layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user. Only the identifier is tracked client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

/// One key/value setting inside a preference record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceEntry {
    pub key: String,
    pub value: String,
}

impl PreferenceEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Common shape shared by every preference group.
///
/// `id` is `None` on unsaved drafts; the server assigns one on create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user: String,
    pub preferences: Vec<PreferenceEntry>,
}

/// A persisted per-user preference document, discriminated by `group`.
///
/// At most one record exists per `(user, group)` pair; an absent record
/// is a valid state meaning defaults apply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "group")]
pub enum UserPreference {
    #[serde(rename = "first-time-modal")]
    FirstTimeModal(PreferenceRecord),
    #[serde(rename = "theme")]
    Theme(PreferenceRecord),
    #[serde(rename = "preferred-payment")]
    PreferredPayment(PreferenceRecord),
}

impl UserPreference {
    #[must_use]
    pub fn record(&self) -> &PreferenceRecord {
        match self {
            Self::FirstTimeModal(record) | Self::Theme(record) | Self::PreferredPayment(record) => {
                record
            }
        }
    }

    pub fn record_mut(&mut self) -> &mut PreferenceRecord {
        match self {
            Self::FirstTimeModal(record) | Self::Theme(record) | Self::PreferredPayment(record) => {
                record
            }
        }
    }

    /// Server-assigned identifier; `None` for unsaved drafts.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.record().id.as_deref()
    }

    /// Identifier of the owning user.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.record().user
    }
}

/// Entry key used by the `preferred-payment` group for the chosen method.
/// No derivation logic consumes this group yet; it rides along as plain
/// entries.
pub const PREFERRED_PAYMENT_METHOD_KEY: &str = "preferred-payment-method";

/// Entry key used by the `preferred-payment` group for the currency choice.
pub const PREFERRED_CURRENCY_KEY: &str = "currency";

/// Theme values stored under the `theme` preference key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parse a stored entry value. Anything other than `"dark"` reads as
    /// light, so unknown values fall back to the default.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// First-time modals the UI can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnownModal {
    Balances,
    ScheduledPayment,
}

impl KnownModal {
    /// Every known modal, in the precedence order used to pick "which
    /// modal is next".
    pub const ALL: [Self; 2] = [Self::Balances, Self::ScheduledPayment];

    /// The preference entry key marking this modal as dismissed.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balances => "balances",
            Self::ScheduledPayment => "scheduled-payment",
        }
    }
}

/// A character returned by the third-party catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub image: String,
}

/// Envelope around the catalog's paginated listing.
#[derive(Clone, Debug, Deserialize)]
pub struct CharacterPage {
    pub results: Vec<Character>,
}

/// Gender filter accepted by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Catalog filters; unset fields are omitted from the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterFilters {
    pub page: Option<u32>,
    pub status: Option<String>,
    pub species: Option<String>,
    pub name: Option<String>,
    pub gender: Option<Gender>,
}

impl CharacterFilters {
    /// Stable cache key for this filter set: `key-value` pairs joined
    /// with `.`.
    #[must_use]
    pub fn query_key(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}-{value}"))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Pairs to append to the request URL, in declaration order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(species) = &self.species {
            pairs.push(("species", species.clone()));
        }
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(gender) = self.gender {
            pairs.push(("gender", gender.as_str().to_owned()));
        }
        pairs
    }
}
