//! Drop Zone Component
//!
//! A horizontal line drop zone between rows for drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_gap_mouseenter, make_on_mouseleave, DndSignals, DropTarget};

/// Gap before row `gap`; `gap == len` sits after the last row
#[component]
pub fn DropZone(dnd: DndSignals, gap: usize) -> impl IntoView {
    let on_mouseenter = make_on_gap_mouseenter(dnd, gap);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || dnd.drop_target_read.get() == Some(DropTarget::Gap(gap));
    // Only show when dragging
    let is_dragging = move || dnd.dragging_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
