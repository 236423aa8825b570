//! REST client for the third-party character catalog.

#[cfg(test)]
#[path = "characters_test.rs"]
mod characters_test;

use super::types::{Character, CharacterFilters, CharacterPage};
use super::{ensure_ok, send_with_retry};
use crate::error::Error;

/// Client for `{base}/api/character`.
#[derive(Clone, Debug)]
pub struct CharactersApi {
    http: reqwest::Client,
    base_url: String,
}

impl CharactersApi {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    /// Fetch the filtered listing and unwrap the `results` envelope.
    ///
    /// # Errors
    ///
    /// `Transport` on a non-success status, `Http` if the request or
    /// body decode fails.
    pub async fn list(&self, filters: &CharacterFilters) -> Result<Vec<Character>, Error> {
        let url = format!("{}/api/character", self.base_url);
        let request = self.http.get(&url).query(&filters.query_pairs());
        let response = send_with_retry(request).await?;
        let response = ensure_ok(response, "could not get characters").await?;
        let page: CharacterPage = response.json().await?;
        Ok(page.results)
    }
}
