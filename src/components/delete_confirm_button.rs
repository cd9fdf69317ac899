//! Delete Confirm Button Component
//!
//! Per-row removal control for the reorderable lists. Renders as buttons so
//! a press never starts a row drag, and stops click propagation so the row
//! underneath does not react.

use leptos::prelude::*;

/// Two-step remove: × first, then the prompt with ✓/✗.
/// Confirming collapses back to × and runs `on_confirm` once.
///
/// # Arguments
/// * `button_class` - CSS class for the initial × button
/// * `prompt` - Confirmation text, "Remove?" when omitted
/// * `on_confirm` - Runs once the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(optional, into)] prompt: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = prompt.unwrap_or_else(|| "Remove?".to_string());

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class=button_class.clone()
                    title="Remove"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "×"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
