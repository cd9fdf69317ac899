//! Toast Host Component
//!
//! Renders store toasts; click to dismiss early.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_admin_store, AdminStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.success { "toast success" } else { "toast error" };
                    view! {
                        <div class=class role="status" on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
