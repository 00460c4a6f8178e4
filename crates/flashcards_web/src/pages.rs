//! Top level pages.

use crate::{
    components::*,
    context::{get_client, get_state},
};
use chrono::Utc;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

#[component]
pub fn Home() -> impl IntoView {
    tracing::info!("Rendering Home");

    let state = get_state();
    let client = get_client();

    // lookups run independently and add their card when they finish
    let create_act = Action::new(move |word: &String| {
        let word = word.clone();
        async move {
            match SendWrapper::new(client.lookup(&word)).await {
                Ok(card) => state.update(|s| {
                    s.add_card(card, Utc::now());
                }),
                Err(err) => tracing::error!("Error adding flashcard: {err}"),
            }
        }
    });

    let visible_cards = Memo::new(move |_| state.with(|s| s.visible_cards()));
    let has_cards = Memo::new(move |_| visible_cards.with(|cards| !cards.is_empty()));
    let cards_view = move || {
        if has_cards.get() {
            view! { <FlashcardList cards=visible_cards/> }.into_any()
        } else {
            view! { <EmptyState create=create_act/> }.into_any()
        }
    };

    view! {
        <Header create=create_act/>
        <SearchBar/>
        {cards_view}
    }
}
