//! Provides all of the flashcards core functionality.

pub mod card;
pub mod lookup;
pub mod state;
pub mod store;

pub use self::{
    card::{CardDraft, CardFace, CardId, Flashcard},
    lookup::{card_from_entries, LookupError},
    state::AppState,
    store::CardStore,
};
