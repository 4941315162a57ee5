//! Retained view of the item list plus the warning banner
//!
//! [`ViewSync`] is a one-way projection of [`ItemStore`](crate::ItemStore):
//! the reducer mutates the store first, then tells the view what happened.
//! Components render from the view's entries, never from the store.

use tracing::debug;

use crate::item::{Item, ItemId};

/// One rendered row of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub id: ItemId,
    pub counter_text: String,
}

impl RenderedEntry {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            counter_text: item.counter.to_string(),
        }
    }
}

/// Single-slot warning banner
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BannerState {
    #[default]
    Hidden,
    Shown(String),
}

impl BannerState {
    pub fn is_shown(&self) -> bool {
        matches!(self, BannerState::Shown(_))
    }
}

/// Rendered mirror of the store
#[derive(Debug, Clone, Default)]
pub struct ViewSync {
    entries: Vec<RenderedEntry>,
    banner: BannerState,
}

impl ViewSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row for a freshly added item
    ///
    /// The add that takes the list from empty to one row also dismisses any
    /// warning still on screen.
    pub fn on_item_added(&mut self, item: &Item) {
        let was_empty = self.entries.is_empty();
        self.entries.push(RenderedEntry::from_item(item));
        debug!(id = %item.id, rows = self.entries.len(), "row appended");

        if was_empty {
            self.dismiss_warning();
        }
    }

    /// Drop the last row. The store removal must already have succeeded.
    pub fn on_item_removed(&mut self) {
        if let Some(entry) = self.entries.pop() {
            debug!(id = %entry.id, rows = self.entries.len(), "row removed");
        }
    }

    /// Update the counter text of the row for `id`
    ///
    /// Returns `false` when no row carries that id.
    pub fn on_counter_changed(&mut self, id: &ItemId, new_value: u64) -> bool {
        match self.entries.iter_mut().find(|entry| &entry.id == id) {
            Some(entry) => {
                entry.counter_text = new_value.to_string();
                true
            }
            None => false,
        }
    }

    /// Replace the banner with a warning carrying `message`
    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.banner = BannerState::Shown(message.into());
    }

    /// Clear the banner. Does nothing when it is already hidden.
    pub fn dismiss_warning(&mut self) {
        self.banner = BannerState::Hidden;
    }

    pub fn entries(&self) -> &[RenderedEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&RenderedEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn banner(&self) -> &BannerState {
        &self.banner
    }

    /// Message of the visible warning, if any
    pub fn warning(&self) -> Option<&str> {
        match &self.banner {
            BannerState::Shown(message) => Some(message),
            BannerState::Hidden => None,
        }
    }
}
