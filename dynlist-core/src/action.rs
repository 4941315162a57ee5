//! Actions: everything a user can ask the list to do

use std::fmt::Debug;

use dynlist_macros::Action;

use crate::item::ItemId;

/// Trait for values that can be dispatched through an [`App`](crate::App)
///
/// Use `#[derive(Action)]` from `dynlist-macros` to implement it for an enum.
pub trait Action: Clone + Debug + Send + 'static {
    /// Variant name, for logging
    fn name(&self) -> &'static str;

    /// Category inferred from the variant name (`ItemAdd` -> `"item"`)
    fn category(&self) -> Option<&'static str>;

    /// One-line description used by the action log
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}

/// User intents for the list
///
/// Categories (inferred from naming):
/// - `item`: ItemAdd, ItemRemoveLast, ItemIncrement
/// - `warning`: WarningDismiss
/// - `select`: SelectNext, SelectPrev
/// - uncategorized: Quit
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum ListAction {
    /// Append a new item
    ItemAdd,

    /// Remove the most recently added item
    ItemRemoveLast,

    /// Add one to the counter of the item with this id
    ItemIncrement(ItemId),

    /// Hide the warning banner
    WarningDismiss,

    /// Move the row cursor down
    SelectNext,

    /// Move the row cursor up
    SelectPrev,

    /// Exit the application (handled by the event loop)
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(ListAction::ItemAdd.name(), "ItemAdd");
        assert_eq!(
            ListAction::ItemIncrement(ItemId::from("item0")).name(),
            "ItemIncrement"
        );
        assert_eq!(ListAction::Quit.name(), "Quit");
    }

    #[test]
    fn test_categories() {
        assert_eq!(ListAction::ItemRemoveLast.category(), Some("item"));
        assert_eq!(ListAction::WarningDismiss.category(), Some("warning"));
        assert_eq!(ListAction::SelectPrev.category(), Some("select"));
        assert_eq!(ListAction::Quit.category(), None);
    }

    #[test]
    fn test_summary_includes_payload() {
        let action = ListAction::ItemIncrement(ItemId::from("item7"));
        assert!(action.summary().contains("item7"));
    }
}
