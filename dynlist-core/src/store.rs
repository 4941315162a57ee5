//! Ordered item store, the single source of truth for list state

use tracing::debug;

use crate::error::StoreError;
use crate::item::{Item, ItemId, DEFAULT_ID_PREFIX};

/// Append/remove-at-end collection of [`Item`]s
///
/// Insertion order defines both stack order and id assignment. The sequence
/// counter only ever grows, so ids of removed items are never reused.
///
/// # Example
/// ```
/// use dynlist_core::{ItemStore, StoreError};
///
/// let mut store = ItemStore::new();
/// let first = store.add_item();
/// assert_eq!(first.id.as_str(), "item0");
///
/// assert_eq!(store.increment_counter(&first.id), Ok(1));
/// assert_eq!(store.remove_last().map(|item| item.counter), Ok(1));
/// assert_eq!(store.remove_last(), Err(StoreError::Empty));
///
/// // Sequence keeps going after removals
/// assert_eq!(store.add_item().id.as_str(), "item1");
/// ```
#[derive(Debug, Clone)]
pub struct ItemStore {
    prefix: String,
    items: Vec<Item>,
    next_sequence: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Empty store using [`DEFAULT_ID_PREFIX`]
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }

    /// Empty store assigning ids as `prefix` followed by the sequence number
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            items: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Append a new item with its counter at zero and return a copy of it
    pub fn add_item(&mut self) -> Item {
        let item = Item::new(ItemId::new(&self.prefix, self.next_sequence));
        debug!(id = %item.id, "adding list item");
        self.items.push(item.clone());
        self.next_sequence += 1;
        item
    }

    /// Remove and return the most recently added item
    pub fn remove_last(&mut self) -> Result<Item, StoreError> {
        let item = self.items.pop().ok_or(StoreError::Empty)?;
        debug!(id = %item.id, "removing list item");
        Ok(item)
    }

    /// Add one to the counter of the item with `id` and return the new value
    pub fn increment_counter(&mut self, id: &ItemId) -> Result<u64, StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        item.counter += 1;
        Ok(item.counter)
    }

    /// Number of items currently in the store
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sequence number the next added item will get
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
