//! Reconciliation Client Contract
//!
//! Abstract interface to the backend that owns the persisted order.
//! Implementations: REST over reqwest (`http`), in-memory fakes in tests.

use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;

use crate::item::OrderedItem;

/// Saving a new order failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("no response before timeout")]
    Timeout,
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Loading the collection failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("no response before timeout")]
    Timeout,
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// Backend for one ordered collection.
///
/// Futures are not `Send`: everything runs on the UI event loop.
#[async_trait(?Send)]
pub trait ReorderBackend<T: OrderedItem> {
    /// Full collection, already sorted by persisted order
    async fn fetch_all(&self) -> Result<Vec<T>, FetchError>;

    /// Persist the complete ordered id list (never a diff)
    async fn persist_order(&self, ids: &[T::Id]) -> Result<(), PersistError>;
}

#[async_trait(?Send)]
impl<T: OrderedItem, B: ReorderBackend<T> + ?Sized> ReorderBackend<T> for Rc<B> {
    async fn fetch_all(&self) -> Result<Vec<T>, FetchError> {
        (**self).fetch_all().await
    }

    async fn persist_order(&self, ids: &[T::Id]) -> Result<(), PersistError> {
        (**self).persist_order(ids).await
    }
}
