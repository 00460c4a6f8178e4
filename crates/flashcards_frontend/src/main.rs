use flashcards_web::{
    context::{self, Config},
    App,
};
use leptos::prelude::*;
use tracing::Level;
use tracing_subscriber::{fmt::format::Pretty, prelude::*};
use tracing_web::{performance_layer, MakeWebConsoleWriter};

/// Does basic setup and provides global context.
pub fn main() {
    console_error_panic_hook::set_once();

    let wasm_log = option_env!("WASM_LOG")
        .and_then(|var| var.parse().ok())
        .unwrap_or(Level::INFO);
    let writer = MakeWebConsoleWriter::new().with_max_level(wasm_log);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(writer);
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();

    let config = option_env!("FLASHCARDS_DICTIONARY_URL")
        .map(|dictionary_url| Config { dictionary_url })
        .unwrap_or_default();

    tracing::info!(
        "Initialising (dictionary at {}, logging level `{wasm_log}`)",
        config.dictionary_url
    );

    leptos::mount::mount_to_body(move || {
        context::initialise_context(config);
        view! { <App/> }
    });
}
