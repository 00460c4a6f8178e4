pub mod client;
pub mod dialog;

use self::{client::Client, dialog::Dialogs};
use flashcards::AppState;
use leptos::prelude::*;

/// Settings fixed when the frontend is built.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub dictionary_url: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_url: flashcards_api::DEFAULT_DICTIONARY_URL,
        }
    }
}

pub fn initialise_context(config: Config) {
    tracing::trace!("initialising context");

    leptos_meta::provide_meta_context();
    leptos::context::provide_context(config);
    leptos::context::provide_context(Client::new(config.dictionary_url));
    leptos::context::provide_context(RwSignal::new(AppState::new()));
    leptos::context::provide_context(Dialogs::new());
}

pub fn get_client() -> Client {
    expect_context::<Client>()
}

/// The single source of truth for the cards and the search query.
pub fn get_state() -> RwSignal<AppState> {
    expect_context::<RwSignal<AppState>>()
}

pub fn get_dialogs() -> Dialogs {
    expect_context::<Dialogs>()
}
