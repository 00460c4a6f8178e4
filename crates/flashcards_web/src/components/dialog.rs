//! Components rendering the currently open dialog.

use crate::context::{
    dialog::{Dialog, Dialogs},
    get_dialogs,
};
use leptos::{html::Input, prelude::*};

/// Renders whichever dialog is open, if any.
#[component]
pub fn DialogHost() -> impl IntoView {
    let dialogs = get_dialogs();

    move || {
        dialogs.current().map(|dialog| match dialog {
            Dialog::Prompt { message, .. } => {
                view! { <PromptDialog message dialogs/> }.into_any()
            }
            Dialog::Confirm { message, .. } => {
                view! { <ConfirmDialog message dialogs/> }.into_any()
            }
        })
    }
}

#[component]
fn PromptDialog(message: &'static str, dialogs: Dialogs) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();
    let value = RwSignal::new(String::new());
    let submit = move || dialogs.close_prompt(Some(value.get_untracked()));
    let cancel = move || dialogs.close_prompt(None);
    // the input is inserted after page load, so autofocus would be ignored
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <div class="modal is-active">
            <div class="modal-background" on:click=move |_ev| cancel()></div>
            <div class="modal-card">
                <section class="modal-card-body">
                    <label class="label">
                        {message}
                        <input
                            class="input"
                            type="text"
                            node_ref=input_ref
                            prop:value=move || value.get()
                            on:input=move |ev| value.set(event_target_value(&ev))
                            on:keydown=move |ev| match ev.key().as_str() {
                                "Enter" => submit(),
                                "Escape" => cancel(),
                                _ => {}
                            }
                        />
                    </label>
                </section>
                <footer class="modal-card-foot buttons">
                    <button class="button is-primary" on:click=move |_ev| submit()>"OK"</button>
                    <button class="button" on:click=move |_ev| cancel()>"Cancel"</button>
                </footer>
            </div>
        </div>
    }
}

#[component]
fn ConfirmDialog(message: &'static str, dialogs: Dialogs) -> impl IntoView {
    view! {
        <div class="modal is-active">
            <div class="modal-background" on:click=move |_ev| dialogs.close_confirm(false)></div>
            <div class="modal-card">
                <section class="modal-card-body">
                    <p>{message}</p>
                </section>
                <footer class="modal-card-foot buttons">
                    <button class="button is-danger" on:click=move |_ev| dialogs.close_confirm(true)>
                        "Yes"
                    </button>
                    <button class="button" on:click=move |_ev| dialogs.close_confirm(false)>
                        "No"
                    </button>
                </footer>
            </div>
        </div>
    }
}
