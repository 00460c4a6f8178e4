//! Custom components.

pub mod dialog;

use crate::context::{dialog::Dialogs, get_dialogs, get_state};
use flashcards::{CardFace, Flashcard};
use leptos::{ev, prelude::*};

/// Asks for a word and starts looking it up, unless the prompt is cancelled.
fn prompt_for_card(dialogs: Dialogs, create: Action<String, ()>) {
    dialogs.prompt_word(move |word| {
        create.dispatch(word);
    });
}

#[component]
pub fn Header(create: Action<String, ()>) -> impl IntoView {
    let dialogs = get_dialogs();

    view! {
        <header class="app-header level">
            <div class="level-left">
                <h1 class="title">"Flashcards App"</h1>
            </div>
            <div class="level-right">
                <button class="button is-primary create-button" on:click=move |_ev| prompt_for_card(dialogs, create)>
                    "Create"
                </button>
            </div>
        </header>
    }
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let state = get_state();

    view! {
        <div class="search-bar block">
            <input
                class="input"
                type="text"
                placeholder="Search Flashcards"
                prop:value=move || state.with(|s| s.search().to_string())
                on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn EmptyState(create: Action<String, ()>) -> impl IntoView {
    let dialogs = get_dialogs();

    view! {
        <div class="no-card has-text-centered">
            <span>"You don't have any cards yet, click on 'Add card' to start learning!"</span>
            <br/>
            <button class="button is-primary create-button mt-6" on:click=move |_ev| prompt_for_card(dialogs, create)>
                "Add card"
            </button>
        </div>
    }
}

#[component]
pub fn FlashcardList(cards: Memo<Vec<Flashcard>>) -> impl IntoView {
    // keyed by id so that cards keep their face when other cards change
    view! {
        <div class="flashcard-list">
            <For
                each=move || cards.get()
                key=|card: &Flashcard| card.id
                children=move |card: Flashcard| view! { <FlashcardItem card/> }
            />
        </div>
    }
}

#[component]
pub fn FlashcardItem(card: Flashcard) -> impl IntoView {
    let state = get_state();
    let dialogs = get_dialogs();

    let face = RwSignal::new(CardFace::default());
    let comment = RwSignal::new(card.comments.clone());

    let id = card.id;
    let confirm_delete = move |_ev: ev::MouseEvent| dialogs.confirm_removal(state, id);
    let update_comment = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        state.update(|s| {
            s.update_comment(id, &text);
        });
        comment.set(text);
    };

    let front_class = move || {
        if face.get().is_flipped() {
            "flashcard-front is-hidden"
        } else {
            "flashcard-front"
        }
    };
    let back_class = move || {
        if face.get().is_flipped() {
            "flashcard-back content"
        } else {
            "flashcard-back content is-hidden"
        }
    };

    let synonyms = card.synonyms_text();
    let antonyms = card.antonyms_text();
    let Flashcard {
        word,
        meaning,
        sentence,
        ..
    } = card;

    view! {
        <div class="flashcard-item box">
            <div class=front_class>
                <h3 class="title is-4">{word}</h3>
            </div>
            <div class=back_class>
                <p>"Meaning: " {meaning}</p>
                <p>"Synonyms: " {synonyms}</p>
                <p>"Antonyms: " {antonyms}</p>
                <p>"Sentence: " {sentence}</p>
                <textarea
                    class="textarea"
                    placeholder="Add comments..."
                    prop:value=move || comment.get()
                    on:input=update_comment
                ></textarea>
            </div>
            <div class="buttons mt-3">
                <button class="button flip-button" on:click=move |_ev| face.update(CardFace::flip)>
                    "Flip"
                </button>
                <button class="button is-danger delete-button" on:click=confirm_delete>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
