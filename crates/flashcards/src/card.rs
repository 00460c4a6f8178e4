//! The flashcard record and its per-card display state.

use chrono::{DateTime, Utc};
use std::fmt;

/// Identifies a card for the lifetime of the session.
/// Derived from the creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub i64);

impl CardId {
    /// The id for a card created at `created_at`, bumped past `previous` if needed
    /// so that ids keep increasing.
    pub fn next(created_at: DateTime<Utc>, previous: Option<CardId>) -> Self {
        let millis = created_at.timestamp_millis();
        match previous {
            Some(CardId(previous)) if previous >= millis => CardId(previous + 1),
            _ => CardId(millis),
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card produced by a lookup that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub word: String,
    pub meaning: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub id: CardId,
    pub word: String,
    /// The first definition of the word.
    pub meaning: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    /// Example usage, empty if the dictionary had none.
    pub sentence: String,
    pub comments: String,
}

impl Flashcard {
    pub fn new(id: CardId, draft: CardDraft) -> Self {
        let CardDraft {
            word,
            meaning,
            synonyms,
            antonyms,
            sentence,
        } = draft;
        Self {
            id,
            word,
            meaning,
            synonyms,
            antonyms,
            sentence,
            comments: String::new(),
        }
    }

    pub fn synonyms_text(&self) -> String {
        join_or_dash(&self.synonyms)
    }

    pub fn antonyms_text(&self) -> String {
        join_or_dash(&self.antonyms)
    }

    /// Whether the word contains `query`, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        self.word.to_lowercase().contains(&query.to_lowercase())
    }
}

fn join_or_dash(words: &[String]) -> String {
    if words.is_empty() {
        "-".to_string()
    } else {
        words.join(", ")
    }
}

/// Which side of a card is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    /// Only the word.
    #[default]
    Front,
    /// The definition, synonyms, antonyms, example and comments.
    Back,
}

impl CardFace {
    pub fn flip(&mut self) {
        *self = match self {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        };
    }

    pub fn is_flipped(self) -> bool {
        self == CardFace::Back
    }
}
