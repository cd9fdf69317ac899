//! Members Directory Screen
//!
//! Searchable, paginated membership table. Search input is debounced and
//! responses for superseded queries are dropped.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reorder_core::{Debouncer, Notification, PageState};

use crate::api;
use crate::context::AppContext;
use crate::models::Member;
use crate::store::{store_toast, use_admin_store};

#[component]
pub fn MembersDirectoryScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_admin_store();
    let toast_ms = ctx.config.toast_duration_ms;

    let page = RwSignal::new(PageState::new(ctx.config.page_size));
    let (members, set_members) = signal(Vec::<Member>::new());
    let (loading, set_loading) = signal(false);
    let (search_text, set_search_text) = signal(String::new());

    let client = StoredValue::new_local(ctx.api());
    let debouncer = StoredValue::new_local(Rc::new(Debouncer::new(ctx.config.search_debounce())));
    let request_seq = StoredValue::new(0u64);

    // Only page/limit/search changes refetch; total updates do not
    let query = Memo::new(move |_| page.with(|p| p.query_pairs()));

    Effect::new(move |_| {
        let pairs = query.get();
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_loading.set(true);
        let api = client.get_value();
        spawn_local(async move {
            let result = api::list_members(&api, &pairs).await;
            if request_seq.get_value() != seq {
                log::debug!("[DIRECTORY] dropping stale response #{}", seq);
                return;
            }
            set_loading.set(false);
            match result {
                Ok(found) => {
                    set_members.set(found.members);
                    if let Some(total) = found.total {
                        page.update(|p| p.set_total(total));
                    }
                }
                Err(e) => {
                    log::warn!("[DIRECTORY] list failed: {}", e);
                    store_toast(store, Notification::failure("Failed to load members"), toast_ms);
                }
            }
        });
    });

    let on_search = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        set_search_text.set(text.clone());
        let debouncer = debouncer.get_value();
        spawn_local(async move {
            if let Some(settled) = debouncer.settle(&text).await {
                if page.with_untracked(|p| p.search != settled) {
                    page.update(|p| p.set_search(&settled));
                }
            }
        });
    };

    let page_label = move || {
        page.with(|p| match p.total_pages() {
            Some(pages) => format!("Page {} of {}", p.page, pages.max(1)),
            None => format!("Page {}", p.page),
        })
    };

    view! {
        <div class="screen members-directory">
            <h2>"Members Directory"</h2>
            <input
                type="search"
                class="directory-search"
                placeholder="Search by name, phone or membership ID"
                prop:value=move || search_text.get()
                on:input=on_search
            />
            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <table class="directory-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Membership ID"</th>
                        <th>"Phone"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || members.get()
                        key=|member| member.id.clone()
                        children=move |member| {
                            view! {
                                <tr>
                                    <td>{member.name.clone()}</td>
                                    <td>{member.membership_id.clone().unwrap_or_default()}</td>
                                    <td>{member.phone.clone().unwrap_or_default()}</td>
                                    <td>{member.status.clone().unwrap_or_default()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || !loading.get() && members.with(|m| m.is_empty())>
                <p class="empty-list">"No members found."</p>
            </Show>
            <div class="pagination">
                <button
                    disabled=move || !page.with(|p| p.has_prev())
                    on:click=move |_| page.update(|p| { p.prev_page(); })
                >
                    "Previous"
                </button>
                <span class="page-label">{page_label}</span>
                <button
                    disabled=move || !page.with(|p| p.has_next())
                    on:click=move |_| page.update(|p| { p.next_page(); })
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
