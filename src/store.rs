//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use reorder_core::Notification;

/// Dashboard screens reachable from the tab bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    ExclusiveMembers,
    SurveyQuestions,
    Directory,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::ExclusiveMembers, Tab::SurveyQuestions, Tab::Directory];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::ExclusiveMembers => "Exclusive Members",
            Tab::SurveyQuestions => "Survey Questions",
            Tab::Directory => "Members Directory",
        }
    }
}

/// Transient success/failure message
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub success: bool,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    pub active_tab: Tab,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Push a toast and return its id
pub fn store_push_toast(store: &AdminStore, notification: Notification) -> u32 {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast {
        id,
        message: notification.message,
        success: notification.success,
    });
    id
}

/// Remove a toast by ID (no-op if already dismissed)
pub fn store_dismiss_toast(store: &AdminStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}

/// Push a toast that dismisses itself after `duration_ms`
pub fn store_toast(store: AdminStore, notification: Notification, duration_ms: u64) {
    log::debug!("[TOAST] {} (success={})", notification.message, notification.success);
    let id = store_push_toast(&store, notification);
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(u32::try_from(duration_ms).unwrap_or(u32::MAX)).await;
        store_dismiss_toast(&store, id);
    });
}
