//! Reorder Controller
//!
//! Owns the ordered store of one list view and runs the protocol:
//!
//! 1. drop -> validated move (cancelled drops touch nothing)
//! 2. optimistic apply + observer callback, before any network I/O
//! 3. persist the full id list, bounded by a timeout
//! 4. failure -> refetch and replace the store, never retry
//!
//! Persists are single-flight per list. Drops arriving while a cycle is
//! in flight are applied at once and coalesced: only the latest full order
//! is sent when the current cycle ends.
//!
//! A reload requested mid-cycle drops the queued order and runs once the
//! in-flight persist settles, so the store never diverges from what the
//! server was last told.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;

use crate::client::{FetchError, PersistError, ReorderBackend};
use crate::gesture::{self, DragResult, GestureError, Reorder};
use crate::item::OrderedItem;
use crate::notify::{Notification, Notifier};
use crate::store::OrderedList;
use crate::timer::{default_timer, with_timeout, Timer};

pub const ORDER_UPDATED: &str = "Order updated successfully";
pub const ORDER_UPDATE_FAILED: &str = "Failed to update order";

/// Per-list behavior knobs
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderOptions {
    /// Upper bound for every backend call; expiry counts as failure
    pub timeout: Duration,
    /// Send a request even when an item is dropped on its own slot
    pub persist_noop_moves: bool,
    /// Collection name used in messages, e.g. "exclusive members"
    pub label: String,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            persist_noop_moves: false,
            label: "items".to_string(),
        }
    }
}

impl ReorderOptions {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// How a drop ended, from the point of view of the call that handled it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Gesture rejected; store and network untouched
    Cancelled(GestureError),
    /// Dropped on its own slot and not persisted
    Unchanged,
    /// Applied locally; an in-flight cycle will send it
    Queued,
    Persisted,
    /// Persist failed; store replaced by server truth
    RevertedViaRefetch(PersistError),
    /// Persist failed but a newer order was already waiting to be sent
    Superseded(PersistError),
    /// Persist and recovery both failed; store keeps its last state
    RefetchFailed { persist: PersistError, fetch: FetchError },
}

type LoadResult = Result<usize, FetchError>;

struct Flight<Id> {
    in_flight: bool,
    pending: Option<Vec<Id>>,
    /// Loads waiting for the current cycle to settle
    reloads: Vec<oneshot::Sender<LoadResult>>,
}

impl<Id> Flight<Id> {
    fn idle() -> Self {
        Self {
            in_flight: false,
            pending: None,
            reloads: Vec::new(),
        }
    }
}

/// Clears the flight if a persist cycle is dropped before it finishes
struct FlightGuard<'a, Id> {
    flight: &'a RefCell<Flight<Id>>,
}

impl<Id> Drop for FlightGuard<'_, Id> {
    fn drop(&mut self) {
        let mut flight = self.flight.borrow_mut();
        if flight.in_flight {
            log::warn!("[REORDER] persist cycle abandoned, dropping queued order");
        }
        // Dropped senders wake waiting loads, which then fetch themselves
        *flight = Flight::idle();
    }
}

type Observer<T> = Box<dyn Fn(&[T])>;

/// Protocol driver for one reorderable list
pub struct ReorderController<T: OrderedItem, B: ReorderBackend<T>> {
    store: RefCell<OrderedList<T>>,
    backend: B,
    timer: Rc<dyn Timer>,
    notifier: Rc<dyn Notifier>,
    observer: RefCell<Option<Observer<T>>>,
    flight: RefCell<Flight<T::Id>>,
    /// Bumped by every optimistic apply
    revision: Cell<u64>,
    options: ReorderOptions,
}

impl<T: OrderedItem, B: ReorderBackend<T>> ReorderController<T, B> {
    pub fn new(backend: B, notifier: impl Notifier + 'static, options: ReorderOptions) -> Self {
        Self {
            store: RefCell::new(OrderedList::new()),
            backend,
            timer: default_timer(),
            notifier: Rc::new(notifier),
            observer: RefCell::new(None),
            flight: RefCell::new(Flight::idle()),
            revision: Cell::new(0),
            options,
        }
    }

    pub fn with_timer(mut self, timer: Rc<dyn Timer>) -> Self {
        self.timer = timer;
        self
    }

    /// Called with the full sequence after every store change
    pub fn on_change(&self, observer: impl Fn(&[T]) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    pub fn items(&self) -> Vec<T> {
        self.store.borrow().items().to_vec()
    }

    pub fn ids(&self) -> Vec<T::Id> {
        self.store.borrow().ids()
    }

    pub fn is_persisting(&self) -> bool {
        self.flight.borrow().in_flight
    }

    /// Initial load, or reload after an unrelated mutation.
    ///
    /// Replaces the store wholesale on success. On failure the store keeps
    /// what it had and a notification is emitted.
    ///
    /// While a persist is in flight the queued order is discarded and the
    /// fetch runs after the in-flight request settles. A fetch overtaken by
    /// a drop is repeated rather than applied.
    pub async fn load(&self) -> Result<usize, FetchError> {
        loop {
            if let Some(settled) = self.defer_load() {
                match settled.await {
                    Ok(result) => return result,
                    // Cycle abandoned; nothing in flight any more
                    Err(oneshot::Canceled) => continue,
                }
            }

            let revision = self.revision.get();
            let result = self.fetch().await;
            if self.revision.get() != revision {
                log::debug!("[REORDER] {} moved during load, fetching again", self.options.label);
                continue;
            }
            return self.finish_load(result);
        }
    }

    fn defer_load(&self) -> Option<oneshot::Receiver<LoadResult>> {
        let mut flight = self.flight.borrow_mut();
        if !flight.in_flight {
            return None;
        }
        if flight.pending.take().is_some() {
            log::debug!("[REORDER] reload requested, dropping queued {} order", self.options.label);
        }
        let (tx, rx) = oneshot::channel();
        flight.reloads.push(tx);
        Some(rx)
    }

    fn finish_load(&self, result: Result<Vec<T>, FetchError>) -> LoadResult {
        match result {
            Ok(items) => {
                self.replace(items);
                let len = self.store.borrow().len();
                log::info!("[REORDER] loaded {} {}", len, self.options.label);
                Ok(len)
            }
            Err(err) => {
                log::warn!("[REORDER] loading {} failed: {}", self.options.label, err);
                self.notifier.notify(self.load_failed());
                Err(err)
            }
        }
    }

    /// Handle one drop from the drag layer.
    ///
    /// Returns the outcome of the last persist cycle this call drove, which
    /// may include orders queued by later drops.
    pub async fn handle_drop(&self, drag: DragResult) -> ReorderOutcome {
        let len = self.store.borrow().len();
        let reorder = match gesture::resolve(drag, len) {
            Ok(reorder) => reorder,
            Err(err) => {
                log::debug!("[REORDER] drop ignored: {}", err);
                return ReorderOutcome::Cancelled(err);
            }
        };
        if reorder.is_noop() && !self.options.persist_noop_moves {
            return ReorderOutcome::Unchanged;
        }

        let ids = self.apply(reorder);

        {
            let mut flight = self.flight.borrow_mut();
            if flight.in_flight {
                log::debug!("[REORDER] persist in flight, queueing latest order");
                flight.pending = Some(ids);
                return ReorderOutcome::Queued;
            }
            flight.in_flight = true;
        }

        let _guard = FlightGuard { flight: &self.flight };
        self.drive(ids).await
    }

    fn apply(&self, reorder: Reorder) -> Vec<T::Id> {
        let ids = {
            let mut store = self.store.borrow_mut();
            let next = store.move_item(reorder.from, reorder.to);
            store.replace(next);
            store.ids()
        };
        self.revision.set(self.revision.get() + 1);
        log::debug!("[REORDER] moved {} -> {}", reorder.from, reorder.to);
        self.emit();
        ids
    }

    async fn drive(&self, mut ids: Vec<T::Id>) -> ReorderOutcome {
        loop {
            let outcome = self.persist_cycle(ids).await;
            if let Some(latest) = self.flight.borrow_mut().pending.take() {
                ids = latest;
                continue;
            }

            let reloads = std::mem::take(&mut self.flight.borrow_mut().reloads);
            if !reloads.is_empty() {
                let result = self.fetch().await;
                let newer = self.flight.borrow_mut().pending.take();
                if let Some(latest) = newer {
                    // A drop landed during the reload; send it, reload after
                    self.flight.borrow_mut().reloads.extend(reloads);
                    ids = latest;
                    continue;
                }
                let result = self.finish_load(result);
                for reload in reloads {
                    let _ = reload.send(result.clone());
                }
            }

            self.flight.borrow_mut().in_flight = false;
            return outcome;
        }
    }

    async fn persist_cycle(&self, ids: Vec<T::Id>) -> ReorderOutcome {
        log::info!("[REORDER] persisting order of {} {}", ids.len(), self.options.label);
        let result = with_timeout(&*self.timer, self.options.timeout, self.backend.persist_order(&ids))
            .await
            .unwrap_or(Err(PersistError::Timeout));

        match result {
            Ok(()) => {
                self.notifier.notify(Notification::success(ORDER_UPDATED));
                ReorderOutcome::Persisted
            }
            Err(err) => {
                log::warn!("[REORDER] persisting {} failed: {}", self.options.label, err);
                self.notifier.notify(Notification::failure(ORDER_UPDATE_FAILED));
                if self.has_pending() {
                    return ReorderOutcome::Superseded(err);
                }
                self.recover(err).await
            }
        }
    }

    async fn recover(&self, persist: PersistError) -> ReorderOutcome {
        match self.fetch().await {
            // A newer optimistic order arrived during the refetch; it wins
            Ok(_) if self.has_pending() => ReorderOutcome::Superseded(persist),
            Ok(items) => {
                self.replace(items);
                log::info!("[REORDER] reverted {} to server order", self.options.label);
                ReorderOutcome::RevertedViaRefetch(persist)
            }
            Err(fetch) => {
                log::error!("[REORDER] recovery fetch for {} failed: {}", self.options.label, fetch);
                self.notifier.notify(self.load_failed());
                ReorderOutcome::RefetchFailed { persist, fetch }
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<T>, FetchError> {
        with_timeout(&*self.timer, self.options.timeout, self.backend.fetch_all())
            .await
            .unwrap_or(Err(FetchError::Timeout))
    }

    fn has_pending(&self) -> bool {
        self.flight.borrow().pending.is_some()
    }

    fn replace(&self, items: Vec<T>) {
        self.store.borrow_mut().load(items);
        self.emit();
    }

    fn emit(&self) {
        let store = self.store.borrow();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(store.items());
        }
    }

    fn load_failed(&self) -> Notification {
        Notification::failure(format!("Failed to load {}", self.options.label))
    }
}
