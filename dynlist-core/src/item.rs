//! List items and their identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default prefix for item identifiers (`item0`, `item1`, ...)
pub const DEFAULT_ID_PREFIX: &str = "item";

/// Stable identifier of a list item
///
/// Built from a prefix and the zero-based creation sequence number. Once
/// assigned it never changes, and a store never hands out the same id twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Build the id for the given sequence number
    pub fn new(prefix: &str, sequence: u64) -> Self {
        Self(format!("{prefix}{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix of the id, if the id was built with `prefix`
    pub fn sequence(&self, prefix: &str) -> Option<u64> {
        self.0.strip_prefix(prefix)?.parse().ok()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A single list entry with its own counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub counter: u64,
}

impl Item {
    /// Fresh item with its counter at zero
    pub fn new(id: ItemId) -> Self {
        Self { id, counter: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        assert_eq!(ItemId::new("item", 0).as_str(), "item0");
        assert_eq!(ItemId::new("listItem", 12).to_string(), "listItem12");
    }

    #[test]
    fn test_id_sequence() {
        let id = ItemId::new("item", 42);
        assert_eq!(id.sequence("item"), Some(42));
        assert_eq!(id.sequence("other"), None);
    }

    #[test]
    fn test_new_item_starts_at_zero() {
        let item = Item::new(ItemId::from("item3"));
        assert_eq!(item.counter, 0);
        assert_eq!(item.id.as_str(), "item3");
    }
}
