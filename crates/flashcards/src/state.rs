//! Application state shared by the whole page.

use crate::{
    card::{CardDraft, CardId, Flashcard},
    store::CardStore,
};
use chrono::{DateTime, Utc};

/// Everything the page shows: the cards and the current search query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    cards: CardStore,
    search: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &CardStore {
        &self.cards
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// The cards matching the current search, in the order they were added.
    pub fn visible_cards(&self) -> Vec<Flashcard> {
        self.cards
            .filter(&self.search)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn add_card(&mut self, draft: CardDraft, created_at: DateTime<Utc>) -> CardId {
        self.cards.add(draft, created_at)
    }

    /// Should only be called once the user has confirmed the deletion.
    pub fn remove_card(&mut self, id: CardId) -> Option<Flashcard> {
        self.cards.remove(id)
    }

    pub fn update_comment(&mut self, id: CardId, comments: &str) -> bool {
        self.cards.update_comment(id, comments)
    }
}
