//! REST client for the user-preferences collection.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use super::types::UserPreference;
use super::{ensure_ok, send_with_retry};
use crate::error::Error;

/// Client for `{base}/user-preferences`.
#[derive(Clone, Debug)]
pub struct PreferencesApi {
    http: reqwest::Client,
    base_url: String,
}

impl PreferencesApi {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    /// Fetch every record and keep the given user's. The collection
    /// endpoint has no server-side filter.
    ///
    /// # Errors
    ///
    /// `Transport` on a non-success status, `Http` if the request or
    /// body decode fails.
    pub async fn list(&self, user_id: &str) -> Result<Vec<UserPreference>, Error> {
        let url = format!("{}/user-preferences", self.base_url);
        let response = send_with_retry(self.http.get(&url)).await?;
        let response = ensure_ok(response, "could not get user preferences").await?;
        let records: Vec<UserPreference> = response.json().await?;
        Ok(records.into_iter().filter(|record| record.user() == user_id).collect())
    }

    /// Create a draft record (POST, server assigns the id) or update a
    /// saved one (PATCH by id).
    ///
    /// # Errors
    ///
    /// `Transport` on a non-success status, `Http` if the request fails.
    pub async fn upsert(&self, preference: &UserPreference) -> Result<(), Error> {
        match preference.id() {
            None => {
                let url = format!("{}/user-preferences", self.base_url);
                let response = send_with_retry(self.http.post(&url).json(preference)).await?;
                ensure_ok(response, "could not create user preference").await?;
            }
            Some(id) => {
                let url = format!("{}/user-preferences/{id}", self.base_url);
                let response = send_with_retry(self.http.patch(&url).json(preference)).await?;
                ensure_ok(response, "could not update user preference").await?;
            }
        }
        Ok(())
    }
}
