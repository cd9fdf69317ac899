//! Tab Bar Component
//!
//! Switches between dashboard screens. Screens stay mounted; the bar only
//! flips `active_tab` in the store.

use leptos::prelude::*;

use crate::store::{use_admin_store, AdminStateStoreFields, Tab};

#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let tab_class = move || {
                        if store.active_tab().get() == tab { "tab active" } else { "tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| store.active_tab().set(tab)>
                            {tab.title()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
