pub mod components;
pub mod context;
pub mod error;
pub mod pages;

use components::dialog::DialogHost;
use leptos::prelude::*;
use leptos_meta::*;
use pages::*;

/// The whole application. Expects the context to have been initialised.
#[component]
pub fn App() -> impl IntoView {
    tracing::info!("Rendering app");

    view! {
        <Title text="Flashcards App"/>
        <Meta name="description" content="Flashcards for studying English vocabulary"/>
        <div class="section">
            <div class="container app">
                <Home/>
            </div>
        </div>
        <DialogHost/>
    }
}
