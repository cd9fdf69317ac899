//! Reorder List Component
//!
//! Vertical sortable list. Rows are dragged with leptos-dragdrop and dropped
//! either on another row (take its slot) or on a gap between rows.

use leptos::prelude::*;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_mousedown, make_on_mouseleave,
    make_on_row_mouseenter, DropResult, DropTarget,
};
use reorder_core::DragResult;

use super::{DeleteConfirmButton, DropZone};

/// Display data for one row
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    /// Stable item id
    pub key: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
}

/// DOM drop result to the gesture the controller understands
pub fn to_drag_result(result: DropResult) -> DragResult {
    DragResult::new(result.source_index, result.destination_index)
}

#[component]
pub fn ReorderList(
    #[prop(into)] rows: Signal<Vec<ListRow>>,
    #[prop(into)] on_drop: Callback<DropResult>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
    #[prop(into)] empty_text: String,
) -> impl IntoView {
    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |result: DropResult| {
        log::debug!(
            "[DND] drop: source={}, destination={:?}",
            result.source_index,
            result.destination_index
        );
        on_drop.run(result);
    });

    // Index is part of the key so moved rows rebind their handlers
    let indexed_rows = move || rows.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="reorder-list">
            <Show when=move || rows.with(|r| r.is_empty())>
                <p class="empty-list">{empty_text.clone()}</p>
            </Show>

            <DropZone dnd=dnd gap=0 />

            <For
                each=indexed_rows
                key=|(index, row)| (*index, row.key.clone())
                children=move |(index, row)| {
                    let on_mousedown = make_on_mousedown(dnd, index);
                    let on_mouseenter = make_on_row_mouseenter(dnd, index);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let is_dragging = move || dnd.dragging_read.get() == Some(index);
                    let is_drop_target = move || dnd.drop_target_read.get() == Some(DropTarget::Row(index));

                    let row_class = move || {
                        let mut c = String::from("reorder-row");
                        if is_dragging() { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    let key = row.key.clone();
                    let delete = on_delete.map(move |cb| view! {
                        <DeleteConfirmButton
                            button_class="delete-btn"
                            on_confirm=Callback::new(move |_| cb.run(key.clone()))
                        />
                    });

                    view! {
                        <div
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <span class="drag-handle">"⠿"</span>
                            {row.image.clone().map(|src| view! { <img class="row-avatar" src=src alt="" /> })}
                            <div class="row-text">
                                <span class="row-title">{row.title.clone()}</span>
                                {row.subtitle.clone().map(|s| view! { <span class="row-subtitle">{s}</span> })}
                            </div>
                            {delete}
                        </div>

                        <DropZone dnd=dnd gap={index + 1} />
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_maps_to_drag_result() {
        let drag = to_drag_result(DropResult { source_index: 2, destination_index: Some(0) });
        assert_eq!(drag, DragResult::new(2, Some(0)));

        let outside = to_drag_result(DropResult { source_index: 1, destination_index: None });
        assert_eq!(outside.destination_index, None);
    }
}
