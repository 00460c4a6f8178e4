//! Client context for communicating with the dictionary service.

use crate::error::{WebError, WebResult};
use flashcards::{lookup, CardDraft};
use flashcards_api::response as res;
use reqwasm::http::Response;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy)]
pub struct Client {
    dictionary_url: &'static str,
}

/// Non-API methods
impl Client {
    pub fn new(dictionary_url: &'static str) -> Self {
        Self { dictionary_url }
    }

    async fn assert_success(&self, res: &Response) -> eyre::Result<()> {
        match res.status() {
            100..=399 => Ok(()),
            code => {
                let bytes = res.binary().await.unwrap_or_default();
                let body: Cow<'_, str> = match serde_json::from_slice::<res::NotFound>(&bytes) {
                    Ok(not_found) => format!("{}: {}", not_found.title, not_found.message).into(),
                    Err(_) => String::from_utf8_lossy(bytes.as_slice()),
                };
                Err(eyre::eyre!("Request failed: HTTP {code} {body}"))
            }
        }
    }
}

/// API methods
impl Client {
    pub async fn get_entries(&self, word: &str) -> WebResult<res::Entries> {
        tracing::info!("Fetching entries for {word}");

        let url = flashcards_api::entry_url(self.dictionary_url, word);
        let res = reqwasm::http::Request::get(&url)
            .send()
            .await
            .map_err(WebError::from)?;
        self.assert_success(&res).await?;
        let entries: res::Entries = res.json().await.map_err(WebError::from)?;

        tracing::debug!("Fetched entries for {word}: {entries:?}");
        Ok(entries)
    }

    /// Looks up `word` and turns the result into a card ready to be stored.
    pub async fn lookup(&self, word: &str) -> WebResult<CardDraft> {
        let entries = self.get_entries(word).await?;
        let card = lookup::card_from_entries(word, &entries)?;

        tracing::info!("Looked up {word}");
        Ok(card)
    }
}
