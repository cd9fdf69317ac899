//! Ordered Collection Store
//!
//! In-memory ordered sequence of items, the single source of truth for
//! on-screen order. Moves are copy-on-write so the previous sequence stays
//! available for comparison.

use std::collections::HashSet;

use crate::item::OrderedItem;

/// Remove the element at `from` and reinsert it at `to`, returning a new vector.
///
/// Out-of-range indices leave the order unchanged.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = items.to_vec();
    if from >= next.len() || to >= next.len() || from == to {
        return next;
    }
    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

/// Ordered sequence of items, each id present exactly once
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedList<T: OrderedItem> {
    items: Vec<T>,
}

impl<T: OrderedItem> Default for OrderedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: OrderedItem> OrderedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from backend data, see [`OrderedList::load`]
    pub fn from_items(items: Vec<T>) -> Self {
        let mut list = Self::new();
        list.load(items);
        list
    }

    /// Replace the whole sequence.
    ///
    /// Input is trusted to be in display order. Repeated ids keep their
    /// first occurrence only.
    pub fn load(&mut self, items: Vec<T>) {
        let mut seen = HashSet::with_capacity(items.len());
        let before = items.len();
        self.items = items
            .into_iter()
            .filter(|item| seen.insert(item.id()))
            .collect();
        if self.items.len() != before {
            log::warn!(
                "[STORE] dropped {} duplicate id(s) while loading",
                before - self.items.len()
            );
        }
    }

    /// Move one element, returning the new list. `self` is left untouched.
    pub fn move_item(&self, from: usize, to: usize) -> Self {
        Self {
            items: move_item(&self.items, from, to),
        }
    }

    /// Adopt a sequence produced by [`OrderedList::move_item`]
    pub fn replace(&mut self, next: OrderedList<T>) {
        *self = next;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Ids in current display order
    pub fn ids(&self) -> Vec<T::Id> {
        self.items.iter().map(OrderedItem::id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position_of(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| &item.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str);

    impl OrderedItem for Row {
        type Id = &'static str;

        fn id(&self) -> Self::Id {
            self.0
        }
    }

    fn list(ids: &[&'static str]) -> OrderedList<Row> {
        OrderedList::from_items(ids.iter().copied().map(Row).collect())
    }

    #[test]
    fn test_move_to_same_index_is_noop() {
        let abc = list(&["a", "b", "c", "d"]);
        for i in 0..abc.len() {
            assert_eq!(abc.move_item(i, i), abc);
        }
    }

    #[test]
    fn test_move_preserves_membership() {
        let original = list(&["a", "b", "c", "d", "e"]);
        for from in 0..original.len() {
            for to in 0..original.len() {
                let moved = original.move_item(from, to);
                let mut before = original.ids();
                let mut after = moved.ids();
                before.sort();
                after.sort();
                assert_eq!(before, after, "move {} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_move_displaces_single_element() {
        let original = list(&["a", "b", "c", "d", "e"]);
        for from in 0..original.len() {
            for to in 0..original.len() {
                let moved = original.move_item(from, to);
                let picked = original.ids()[from];
                assert_eq!(moved.ids()[to], picked);

                // Everything else keeps its relative order
                let rest_before: Vec<_> = original.ids().into_iter().filter(|id| *id != picked).collect();
                let rest_after: Vec<_> = moved.ids().into_iter().filter(|id| *id != picked).collect();
                assert_eq!(rest_before, rest_after);
            }
        }
    }

    #[test]
    fn test_move_is_copy_on_write() {
        let original = list(&["a", "b", "c"]);
        let moved = original.move_item(2, 0);
        assert_eq!(moved.ids(), vec!["c", "a", "b"]);
        assert_eq!(original.ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        let original = list(&["a", "b", "c"]);
        assert_eq!(original.move_item(3, 0), original);
        assert_eq!(original.move_item(0, 7), original);
        assert_eq!(OrderedList::<Row>::new().move_item(0, 0).len(), 0);
    }

    #[test]
    fn test_load_replaces_and_dedupes() {
        let mut store = list(&["x", "y"]);
        store.load(vec![Row("a"), Row("b"), Row("a"), Row("c")]);
        assert_eq!(store.ids(), vec!["a", "b", "c"]);
        assert_eq!(store.position_of(&"c"), Some(2));
        assert_eq!(store.position_of(&"x"), None);
    }
}
