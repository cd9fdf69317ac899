//! Reorder Core
//!
//! Optimistic reorderable list protocol used by the admin dashboard:
//! - item / store: ordered collection with stable ids
//! - gesture: drag result -> single move
//! - client / http: backend contract and its REST implementation
//! - controller: optimistic apply, single-flight persist, refetch on failure
//!
//! Plus the small pieces every list screen needs: notifications, timers,
//! configuration, debounced search and pagination state.

mod item;
mod store;
mod gesture;
mod client;
mod http;
mod controller;
mod notify;
mod timer;
mod config;
mod search;
mod pagination;

pub use item::OrderedItem;
pub use store::{move_item, OrderedList};
pub use gesture::{resolve, DragResult, GestureError, Reorder};
pub use client::{FetchError, PersistError, ReorderBackend};
pub use http::{decode_data, ApiClient, CollectionEndpoint, Envelope, HttpBackend, ListShape, Session};
pub use controller::{ReorderController, ReorderOptions, ReorderOutcome};
pub use notify::{Notification, Notifier};
pub use timer::{default_timer, with_timeout, Timer};
#[cfg(target_arch = "wasm32")]
pub use timer::GlooTimer;
#[cfg(not(target_arch = "wasm32"))]
pub use timer::TokioTimer;
pub use config::{ConfigError, DashboardConfig};
pub use search::Debouncer;
pub use pagination::PageState;
