//! Render and click tests using RenderHarness
//!
//! Render the whole list screen into a test buffer, then feed clicks at the
//! areas the components recorded and check which actions come back.

use dynlist_core::testing::*;
use dynlist_core::{reducer, AppState, ItemId, Keybindings, ListAction, ListUi};

const WIDTH: u16 = 70;
const HEIGHT: u16 = 14;

fn render(ui: &mut ListUi, state: &AppState) -> String {
    let mut harness = RenderHarness::new(WIDTH, HEIGHT);
    harness.render_to_string_plain(|frame| ui.render(frame, frame.area(), state))
}

fn state_with(adds: usize) -> AppState {
    let mut state = AppState::default();
    for _ in 0..adds {
        reducer(&mut state, ListAction::ItemAdd);
    }
    state
}

#[test]
fn test_render_empty_list() {
    let mut ui = ListUi::new(Keybindings::defaults());
    let output = render(&mut ui, &AppState::default());

    assert!(output.contains("Add list item"), "Should show add button");
    assert!(output.contains("Remove last"), "Should show remove button");
    assert!(output.contains("Items (0)"), "Should show item count");
    assert!(output.contains("No items. Press a"), "Should show add hint");
    assert!(!output.contains("WARNING"), "Banner hidden initially");
}

#[test]
fn test_render_items_with_counters() {
    let mut ui = ListUi::new(Keybindings::defaults());
    let mut state = state_with(3);
    reducer(&mut state, ListAction::ItemIncrement(ItemId::from("item1")));
    reducer(&mut state, ListAction::ItemIncrement(ItemId::from("item1")));

    let output = render(&mut ui, &state);

    assert!(output.contains("Items (3)"));
    let rows: Vec<(&str, &str)> = output.lines().filter_map(id_and_counter).collect();
    assert_eq!(rows, vec![("item0", "0"), ("item1", "2"), ("item2", "0")]);
}

/// Id and counter columns of a rendered row, if the line is a row
fn id_and_counter(line: &str) -> Option<(&str, &str)> {
    let (columns, _) = line.split_once("[+1]")?;
    let mut words = columns
        .split(|c: char| c.is_whitespace() || c == '│' || c == '▶')
        .filter(|w| !w.is_empty());
    let id = words.next()?;
    let counter = words.last()?;
    Some((id, counter))
}

#[test]
fn test_render_warning_banner() {
    let mut ui = ListUi::new(Keybindings::defaults());
    let mut state = AppState::default();
    reducer(&mut state, ListAction::ItemRemoveLast);

    let output = render(&mut ui, &state);

    assert!(output.contains("WARNING!"));
    assert!(output.contains("There are no more list items to remove"));
    assert!(output.contains(CLOSE));
}

const CLOSE: &str = dynlist_core::components::CLOSE_SYMBOL;

#[test]
fn test_toolbar_clicks() {
    let mut ui = ListUi::new(Keybindings::defaults());
    let state = AppState::default();
    render(&mut ui, &state);

    let add = click_on(ui.toolbar().add_area());
    assert_eq!(ui.map_event(&add, &state), vec![ListAction::ItemAdd]);

    let remove = click_on(ui.toolbar().remove_area());
    assert_eq!(ui.map_event(&remove, &state), vec![ListAction::ItemRemoveLast]);

    // Blank space next to the buttons does nothing
    assert!(ui.map_event(&click(WIDTH - 1, 0), &state).is_empty());
}

#[test]
fn test_row_control_click_carries_row_id() {
    let mut ui = ListUi::new(Keybindings::defaults());
    let mut state = state_with(3);
    reducer(&mut state, ListAction::ItemRemoveLast);
    reducer(&mut state, ListAction::ItemAdd); // item3 now in the last row

    render(&mut ui, &state);
    let hits = ui.list().hits().to_vec();
    let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["item0", "item1", "item3"]);

    let actions = ui.map_event(&click_on(hits[2].control), &state);
    assert_eq!(actions, vec![ListAction::ItemIncrement(ItemId::from("item3"))]);

    // Clicking the label part of a row is not an increment
    let label = click(hits[0].row.x, hits[0].row.y);
    assert!(ui.map_event(&label, &state).is_empty());
}

#[test]
fn test_banner_close_click() {
    let mut ui = ListUi::new(Keybindings::defaults());
    let mut state = AppState::default();
    reducer(&mut state, ListAction::ItemRemoveLast);

    render(&mut ui, &state);
    let close = click_on(ui.banner().close_area());
    assert_eq!(ui.map_event(&close, &state), vec![ListAction::WarningDismiss]);

    reducer(&mut state, ListAction::WarningDismiss);
    let output = render(&mut ui, &state);
    assert!(!output.contains("WARNING"));
}

#[test]
fn test_keys_map_to_actions() {
    let mut ui = ListUi::new(Keybindings::defaults());
    let state = state_with(2);

    assert_eq!(
        ui.map_event(&key_event("a"), &state),
        vec![ListAction::ItemAdd]
    );
    assert_eq!(
        ui.map_event(&key_event("r"), &state),
        vec![ListAction::ItemRemoveLast]
    );
    assert_eq!(
        ui.map_event(&key_event("enter"), &state),
        vec![ListAction::ItemIncrement(ItemId::from("item1"))]
    );
    assert_eq!(
        ui.map_event(&key_event("esc"), &state),
        vec![ListAction::WarningDismiss]
    );
    assert_eq!(
        ui.map_event(&key_event("ctrl+c"), &state),
        vec![ListAction::Quit]
    );
    assert!(ui.map_event(&key_event("z"), &state).is_empty());
}

#[test]
fn test_help_bar_uses_configured_keys() {
    let mut kb = Keybindings::defaults();
    kb.bind(dynlist_core::Command::Add, ["n"]);
    let mut ui = ListUi::new(kb);

    let output = render(&mut ui, &AppState::default());
    let help = output.lines().last().unwrap_or_default();

    assert!(help.contains("n add"), "help was {:?}", help);
    assert!(help.contains("quit"));
    assert!(output.contains("No items. Press n"));
}

#[test]
fn test_selected_row_stays_visible() {
    let mut ui = ListUi::new(Keybindings::defaults());
    // More rows than fit in the list viewport
    let state = state_with(20);

    let output = render(&mut ui, &state);
    assert!(output.contains("item19"), "Newest (selected) row visible");
    assert!(!output.contains("item0 "), "Oldest row scrolled away");
}
