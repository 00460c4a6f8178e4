//! In-memory, insertion-ordered storage for flashcards.

use crate::card::{CardDraft, CardId, Flashcard};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardStore {
    cards: Vec<Flashcard>,
    last_id: Option<CardId>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new card. The same word can be added any number of times.
    pub fn add(&mut self, draft: CardDraft, created_at: DateTime<Utc>) -> CardId {
        let id = CardId::next(created_at, self.last_id);
        self.last_id = Some(id);
        tracing::info!("Adding card {id} for '{}'", draft.word);
        self.cards.push(Flashcard::new(id, draft));
        id
    }

    /// Removes the card with the given id, if any.
    pub fn remove(&mut self, id: CardId) -> Option<Flashcard> {
        let idx = self.cards.iter().position(|card| card.id == id)?;
        tracing::info!("Removing card {id}");
        Some(self.cards.remove(idx))
    }

    /// Cards whose word contains `query` case-insensitively, in insertion order.
    pub fn filter<'a>(&'a self, query: &str) -> Vec<&'a Flashcard> {
        self.cards.iter().filter(|card| card.matches(query)).collect()
    }

    /// Replaces the comments of a card. Returns false if the card does not exist.
    pub fn update_comment(&mut self, id: CardId, comments: &str) -> bool {
        match self.cards.iter_mut().find(|card| card.id == id) {
            Some(card) => {
                card.comments = comments.to_string();
                true
            }
            None => {
                tracing::warn!("Tried to comment on missing card {id}");
                false
            }
        }
    }

    pub fn get(&self, id: CardId) -> Option<&Flashcard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flashcard> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
