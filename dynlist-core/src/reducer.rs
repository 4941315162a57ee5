//! Reducer: (state, action) -> re-render needed?
//!
//! Every item action mutates the store first and only then projects the
//! outcome onto the view. The view is never consulted to decide what the
//! store does.

use tracing::warn;

use crate::action::ListAction;
use crate::error::StoreError;
use crate::state::AppState;

/// Apply `action` to `state`
///
/// # Returns
/// `true` if state changed and the UI should re-render
pub fn reducer(state: &mut AppState, action: ListAction) -> bool {
    match action {
        ListAction::ItemAdd => {
            let item = state.store.add_item();
            state.view.on_item_added(&item);
            state.selected = state.view.len().saturating_sub(1);
            true
        }

        ListAction::ItemRemoveLast => match state.store.remove_last() {
            Ok(_) => {
                state.view.on_item_removed();
                state.clamp_selection();
                true
            }
            Err(StoreError::Empty) => {
                let already_shown = state.view.warning() == Some(state.empty_warning.as_str());
                state.view.show_warning(state.empty_warning.clone());
                !already_shown
            }
            Err(err) => {
                warn!(error = %err, "remove failed");
                false
            }
        },

        ListAction::ItemIncrement(id) => match state.store.increment_counter(&id) {
            Ok(value) => state.view.on_counter_changed(&id, value),
            Err(err) => {
                // Stale control for an item that is already gone
                warn!(id = %id, error = %err, "increment ignored");
                false
            }
        },

        ListAction::WarningDismiss => {
            let was_shown = state.view.banner().is_shown();
            state.view.dismiss_warning();
            was_shown
        }

        ListAction::SelectNext => {
            let last = state.view.len().saturating_sub(1);
            if state.selected < last {
                state.selected += 1;
                true
            } else {
                false
            }
        }

        ListAction::SelectPrev => {
            if state.selected > 0 {
                state.selected -= 1;
                true
            } else {
                false
            }
        }

        // Quit is handled in the event loop
        ListAction::Quit => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;
    use crate::state::EMPTY_WARNING;
    use crate::view::BannerState;

    fn view_ids(state: &AppState) -> Vec<&str> {
        state.view.entries().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_add_updates_store_and_view() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, ListAction::ItemAdd));
        assert!(reducer(&mut state, ListAction::ItemAdd));

        assert_eq!(state.store.size(), 2);
        assert_eq!(view_ids(&state), vec!["item0", "item1"]);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_remove_on_empty_shows_warning_once() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, ListAction::ItemRemoveLast));
        assert_eq!(state.view.warning(), Some(EMPTY_WARNING));
        assert_eq!(state.store.size(), 0);

        // Banner already showing the same text: nothing to redraw
        assert!(!reducer(&mut state, ListAction::ItemRemoveLast));
        assert_eq!(state.view.warning(), Some(EMPTY_WARNING));
    }

    #[test]
    fn test_remove_clamps_selection() {
        let mut state = AppState::default();
        reducer(&mut state, ListAction::ItemAdd);
        reducer(&mut state, ListAction::ItemAdd);
        assert_eq!(state.selected, 1);

        reducer(&mut state, ListAction::ItemRemoveLast);
        assert_eq!(state.selected, 0);
        assert_eq!(view_ids(&state), vec!["item0"]);
    }

    #[test]
    fn test_increment_by_id() {
        let mut state = AppState::default();
        reducer(&mut state, ListAction::ItemAdd);
        reducer(&mut state, ListAction::ItemAdd);

        let id = ItemId::from("item0");
        assert!(reducer(&mut state, ListAction::ItemIncrement(id.clone())));

        assert_eq!(state.store.get(&id).map(|i| i.counter), Some(1));
        assert_eq!(state.view.entries()[0].counter_text, "1");
        assert_eq!(state.view.entries()[1].counter_text, "0");
    }

    #[test]
    fn test_stale_increment_is_ignored() {
        let mut state = AppState::default();
        reducer(&mut state, ListAction::ItemAdd);
        reducer(&mut state, ListAction::ItemRemoveLast);

        let changed = reducer(&mut state, ListAction::ItemIncrement(ItemId::from("item0")));
        assert!(!changed);
        assert!(state.view.is_empty());
    }

    #[test]
    fn test_increment_after_removal_targets_id_not_position() {
        let mut state = AppState::default();
        for _ in 0..3 {
            reducer(&mut state, ListAction::ItemAdd);
        }
        reducer(&mut state, ListAction::ItemRemoveLast);
        reducer(&mut state, ListAction::ItemAdd); // item3 sits at index 2

        reducer(&mut state, ListAction::ItemIncrement(ItemId::from("item3")));

        assert_eq!(view_ids(&state), vec!["item0", "item1", "item3"]);
        assert_eq!(state.view.entries()[2].counter_text, "1");
        assert_eq!(state.view.entries()[1].counter_text, "0");
    }

    #[test]
    fn test_dismiss_warning() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, ListAction::WarningDismiss));

        reducer(&mut state, ListAction::ItemRemoveLast);
        assert!(reducer(&mut state, ListAction::WarningDismiss));
        assert_eq!(state.view.banner(), &BannerState::Hidden);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, ListAction::SelectNext));
        assert!(!reducer(&mut state, ListAction::SelectPrev));

        reducer(&mut state, ListAction::ItemAdd);
        reducer(&mut state, ListAction::ItemAdd);
        assert!(reducer(&mut state, ListAction::SelectPrev));
        assert_eq!(state.selected, 0);
        assert!(!reducer(&mut state, ListAction::SelectPrev));
        assert!(reducer(&mut state, ListAction::SelectNext));
        assert!(!reducer(&mut state, ListAction::SelectNext));
    }

    #[test]
    fn test_quit_changes_nothing() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, ListAction::Quit));
    }
}
