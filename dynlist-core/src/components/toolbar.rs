use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::action::ListAction;
use crate::component::{hit, Component};
use crate::event::EventKind;

pub const ADD_LABEL: &str = "[ Add list item ]";
pub const REMOVE_LABEL: &str = "[ Remove last ]";
const GAP: u16 = 2;

/// The two list buttons: add an item, remove the last one
#[derive(Debug, Default)]
pub struct Toolbar {
    add_area: Rect,
    remove_area: Rect,
}

pub struct ToolbarProps {
    /// Rendered dimmed when there is nothing to remove
    pub can_remove: bool,
}

impl Toolbar {
    pub const HEIGHT: u16 = 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Screen area of the add button from the last render
    pub fn add_area(&self) -> Rect {
        self.add_area
    }

    /// Screen area of the remove button from the last render
    pub fn remove_area(&self) -> Rect {
        self.remove_area
    }
}

impl Component for Toolbar {
    type Props<'a> = ToolbarProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = ListAction> {
        match *event {
            EventKind::Click { column, row } if hit(self.add_area, column, row) => {
                Some(ListAction::ItemAdd)
            }
            EventKind::Click { column, row } if hit(self.remove_area, column, row) => {
                Some(ListAction::ItemRemoveLast)
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let add_width = ADD_LABEL.chars().count() as u16;
        let remove_width = REMOVE_LABEL.chars().count() as u16;

        self.add_area = Rect::new(area.x + 1, area.y, add_width, 1).intersection(area);
        self.remove_area =
            Rect::new(area.x + 1 + add_width + GAP, area.y, remove_width, 1).intersection(area);

        let remove_style = if props.can_remove {
            Style::default().fg(Color::Red).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(ADD_LABEL, Style::default().fg(Color::Green).bold()),
            Span::raw(" ".repeat(GAP as usize)),
            Span::styled(REMOVE_LABEL, remove_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
