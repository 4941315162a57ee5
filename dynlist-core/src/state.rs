//! Application state
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use crate::config::Config;
use crate::store::ItemStore;
use crate::view::ViewSync;

/// Message shown when remove is pressed on an empty list
pub const EMPTY_WARNING: &str = "There are no more list items to remove";

/// Everything the UI needs to render
#[derive(Debug, Clone)]
pub struct AppState {
    /// Authoritative item collection
    pub store: ItemStore,

    /// Rendered mirror of `store` plus the warning banner
    pub view: ViewSync,

    /// Keyboard cursor into the rendered rows
    pub selected: usize,

    /// Banner text for a remove on an empty list
    pub empty_warning: String,
}

impl AppState {
    pub fn new(store: ItemStore, empty_warning: impl Into<String>) -> Self {
        Self {
            store,
            view: ViewSync::new(),
            selected: 0,
            empty_warning: empty_warning.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ItemStore::with_prefix(config.id_prefix.clone()),
            config.empty_warning.clone(),
        )
    }

    /// Keep the cursor on an existing row
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.view.len().saturating_sub(1));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ItemStore::new(), EMPTY_WARNING)
    }
}
