//! Modal dialogs that replace the browser's blocking prompt and confirm.
//!
//! A dialog is opened with a callback which receives the result once the user closes it.

use flashcards::{lookup, AppState, CardId};
use leptos::prelude::*;
use std::sync::Arc;

type OnClose<T> = Arc<dyn Fn(T) + Send + Sync>;

#[derive(Clone)]
pub enum Dialog {
    /// Asks for a line of text. Cancelling gives `None`.
    Prompt {
        message: &'static str,
        on_close: OnClose<Option<String>>,
    },
    /// Asks a yes or no question.
    Confirm {
        message: &'static str,
        on_close: OnClose<bool>,
    },
}

#[derive(Clone, Copy)]
pub struct Dialogs {
    current: RwSignal<Option<Dialog>>,
}

impl Dialogs {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn current(&self) -> Option<Dialog> {
        self.current.get()
    }

    pub fn prompt(
        &self,
        message: &'static str,
        on_close: impl Fn(Option<String>) + Send + Sync + 'static,
    ) {
        self.open(Dialog::Prompt {
            message,
            on_close: Arc::new(on_close),
        });
    }

    pub fn confirm(&self, message: &'static str, on_close: impl Fn(bool) + Send + Sync + 'static) {
        self.open(Dialog::Confirm {
            message,
            on_close: Arc::new(on_close),
        });
    }

    /// Asks for a word and calls `on_word` with it, unless the prompt is cancelled or left blank.
    pub fn prompt_word(&self, on_word: impl Fn(String) + Send + Sync + 'static) {
        self.prompt("Enter a word:", move |input| match lookup::prompted_word(input) {
            Some(word) => on_word(word),
            None => tracing::debug!("No word given, not creating a card"),
        });
    }

    /// Removes the card from `state` once the user confirms.
    pub fn confirm_removal(&self, state: RwSignal<AppState>, id: CardId) {
        self.confirm(
            "Are you sure you want to delete this flashcard?",
            move |confirmed| {
                if confirmed {
                    state.update(|s| {
                        s.remove_card(id);
                    });
                } else {
                    tracing::debug!("Kept card {id}");
                }
            },
        );
    }

    pub fn close_prompt(&self, input: Option<String>) {
        match self.take() {
            Some(Dialog::Prompt { on_close, .. }) => on_close(input),
            _ => tracing::warn!("No prompt to close"),
        }
    }

    pub fn close_confirm(&self, confirmed: bool) {
        match self.take() {
            Some(Dialog::Confirm { on_close, .. }) => on_close(confirmed),
            _ => tracing::warn!("No confirmation to close"),
        }
    }

    fn open(&self, dialog: Dialog) {
        // the replaced dialog counts as cancelled
        match self.take() {
            Some(Dialog::Prompt { on_close, .. }) => on_close(None),
            Some(Dialog::Confirm { on_close, .. }) => on_close(false),
            None => {}
        }
        self.current.set(Some(dialog));
    }

    fn take(&self) -> Option<Dialog> {
        let dialog = self.current.get_untracked();
        if dialog.is_some() {
            self.current.set(None);
        }
        dialog
    }
}

impl Default for Dialogs {
    fn default() -> Self {
        Self::new()
    }
}
