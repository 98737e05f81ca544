//! Ordered, append-or-replace collection backing list views
//!
//! Items are never edited in place: a chat transcript grows with
//! [`ListState::append`] and a fetched snapshot is swapped wholesale with
//! [`ListState::replace_all`].

use crate::lifecycle::Slot;

/// Ordered collection with append and snapshot-replace semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item after all existing ones.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Discard the current contents and install `items` as the new snapshot.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ListState<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<'a, T> IntoIterator for &'a ListState<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A settled fetch replaces the snapshot; it never merges.
impl<T> Slot<Vec<T>> for ListState<T> {
    fn install(&mut self, value: Vec<T>) {
        self.replace_all(value);
    }
}
