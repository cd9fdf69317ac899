//! Exclusive Members Screen
//!
//! Sortable list of exclusive members with inline removal.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DropResult;
use reorder_core::{HttpBackend, Notification};

use super::reorder_list::{to_drag_result, ListRow, ReorderList};
use crate::api::{self, ExclusiveMembersController};
use crate::context::AppContext;
use crate::models::ExclusiveMember;
use crate::store::{store_toast, use_admin_store};

impl From<ExclusiveMember> for ListRow {
    fn from(member: ExclusiveMember) -> Self {
        ListRow {
            key: member.id,
            title: member.name,
            subtitle: member.designation.filter(|d| !d.is_empty()),
            image: member.image_url,
        }
    }
}

#[component]
pub fn ExclusiveMembersScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_admin_store();
    let toast_ms = ctx.config.toast_duration_ms;

    let (members, set_members) = signal(Vec::<ExclusiveMember>::new());
    let (loading, set_loading) = signal(true);

    let client = StoredValue::new_local(ctx.api());
    let ctrl = Rc::new(ExclusiveMembersController::new(
        HttpBackend::new(ctx.api(), api::exclusive_members_endpoint()),
        move |n: Notification| store_toast(store, n, toast_ms),
        ctx.config.reorder_options("exclusive members"),
    ));
    ctrl.on_change(move |items: &[ExclusiveMember]| set_members.set(items.to_vec()));
    let controller = StoredValue::new_local(ctrl);

    // Load on mount
    Effect::new(move |_| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            if let Ok(count) = ctrl.load().await {
                log::info!("[MEMBERS] loaded {} exclusive members", count);
            }
            set_loading.set(false);
        });
    });

    let on_drop = Callback::new(move |result: DropResult| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            let outcome = ctrl.handle_drop(to_drag_result(result)).await;
            log::debug!("[MEMBERS] drop outcome: {:?}", outcome);
        });
    });

    let on_delete = Callback::new(move |id: String| {
        let api = client.get_value();
        let ctrl = controller.get_value();
        spawn_local(async move {
            match api::delete_exclusive_member(&api, &id).await {
                Ok(()) => {
                    store_toast(store, Notification::success("Member removed"), toast_ms);
                    let _ = ctrl.load().await;
                }
                Err(e) => {
                    log::warn!("[MEMBERS] delete {} failed: {}", id, e);
                    store_toast(store, Notification::failure("Failed to remove member"), toast_ms);
                }
            }
        });
    });

    let rows = Signal::derive(move || members.get().into_iter().map(ListRow::from).collect::<Vec<_>>());

    view! {
        <div class="screen exclusive-members">
            <h2>"Exclusive Members"</h2>
            <p class="hint">"Drag members to set the order shown on the site."</p>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ReorderList
                    rows=rows
                    on_drop=on_drop
                    on_delete=on_delete
                    empty_text="No exclusive members yet."
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_row() {
        let row = ListRow::from(ExclusiveMember {
            id: "m1".to_string(),
            name: "Ashraf".to_string(),
            designation: Some(String::new()),
            image_url: None,
        });
        assert_eq!(row.key, "m1");
        assert_eq!(row.title, "Ashraf");
        assert_eq!(row.subtitle, None);
    }
}
