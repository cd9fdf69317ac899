//! Ordered Item Trait
//!
//! Basic contract for anything that can live in a reorderable collection.
//! Rank is positional: items carry no position field of their own.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

/// Core trait for items held in an ordered collection
pub trait OrderedItem: Clone + 'static {
    /// The type of the item's stable identifier
    type Id: Clone + Eq + Hash + Debug + Serialize + 'static;

    /// Returns the item's stable identifier
    fn id(&self) -> Self::Id;
}
