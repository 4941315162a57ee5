//! Screen layout and event routing

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::action::ListAction;
use crate::components::{
    Component, HelpBar, HelpBarProps, ItemList, ItemListProps, Toolbar, ToolbarProps,
    WarningBanner, WarningBannerProps,
};
use crate::event::EventKind;
use crate::keybindings::{Command, Keybindings};
use crate::state::AppState;

/// All components of the list screen
///
/// Top to bottom: toolbar, warning banner (only while shown), item list,
/// help bar.
#[derive(Debug)]
pub struct ListUi {
    keybindings: Keybindings,
    toolbar: Toolbar,
    banner: WarningBanner,
    list: ItemList,
}

impl ListUi {
    pub fn new(keybindings: Keybindings) -> Self {
        Self {
            keybindings,
            toolbar: Toolbar::new(),
            banner: WarningBanner::new(),
            list: ItemList::new(),
        }
    }

    pub fn list(&self) -> &ItemList {
        &self.list
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn banner(&self) -> &WarningBanner {
        &self.banner
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let banner_height = if state.view.banner().is_shown() {
            WarningBanner::HEIGHT
        } else {
            0
        };

        let [toolbar_area, banner_area, list_area, help_area] = Layout::vertical([
            Constraint::Length(Toolbar::HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.toolbar.render(
            frame,
            toolbar_area,
            ToolbarProps {
                can_remove: !state.view.is_empty(),
            },
        );
        self.banner.render(
            frame,
            banner_area,
            WarningBannerProps {
                message: state.view.warning(),
            },
        );

        let add_hint = self
            .keybindings
            .display_key(Command::Add)
            .unwrap_or_else(|| "the add button".to_string());
        self.list.render(
            frame,
            list_area,
            ItemListProps {
                entries: state.view.entries(),
                selected: state.selected,
                add_hint: &add_hint,
            },
        );

        HelpBar.render(
            frame,
            help_area,
            HelpBarProps {
                keybindings: &self.keybindings,
            },
        );
    }

    /// Map a terminal event to the actions it triggers
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<ListAction> {
        match event {
            EventKind::Key(key) => self
                .keybindings
                .get_command(key)
                .and_then(|command| command_action(command, state))
                .into_iter()
                .collect(),
            EventKind::Click { .. } => {
                let message = state.view.warning();
                let mut actions: Vec<ListAction> = self
                    .banner
                    .handle_event(event, WarningBannerProps { message })
                    .into_iter()
                    .collect();
                actions.extend(self.toolbar.handle_event(
                    event,
                    ToolbarProps {
                        can_remove: !state.view.is_empty(),
                    },
                ));
                actions.extend(self.list.handle_event(event, list_props(state)));
                actions
            }
            EventKind::Scroll { .. } => self
                .list
                .handle_event(event, list_props(state))
                .into_iter()
                .collect(),
            EventKind::Mouse(_) | EventKind::Resize(..) => Vec::new(),
        }
    }
}

fn list_props(state: &AppState) -> ItemListProps<'_> {
    ItemListProps {
        entries: state.view.entries(),
        selected: state.selected,
        add_hint: "",
    }
}

/// Turn a bound command into an action
///
/// `Increment` resolves the selected row to its item id here, so the action
/// carries the id rather than a position.
pub fn command_action(command: Command, state: &AppState) -> Option<ListAction> {
    match command {
        Command::Add => Some(ListAction::ItemAdd),
        Command::RemoveLast => Some(ListAction::ItemRemoveLast),
        Command::Increment => state
            .view
            .entry(state.selected)
            .map(|entry| ListAction::ItemIncrement(entry.id.clone())),
        Command::DismissWarning => Some(ListAction::WarningDismiss),
        Command::SelectNext => Some(ListAction::SelectNext),
        Command::SelectPrev => Some(ListAction::SelectPrev),
        Command::Quit => Some(ListAction::Quit),
    }
}
