//! Item rows with a per-row `[+1]` control
//!
//! Every control is bound to the id of the row it was rendered for, so a
//! click increments that item no matter how the list shifted since.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::ListAction;
use crate::component::{hit, Component};
use crate::event::EventKind;
use crate::item::ItemId;
use crate::view::RenderedEntry;

pub const INCREMENT_LABEL: &str = "[+1]";

/// A rendered row's id and where its increment control ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHit {
    pub id: ItemId,
    pub row: Rect,
    pub control: Rect,
}

/// Scrollable list of items
#[derive(Debug, Default)]
pub struct ItemList {
    scroll_offset: usize,
    hits: Vec<RowHit>,
}

pub struct ItemListProps<'a> {
    pub entries: &'a [RenderedEntry],
    pub selected: usize,
    /// Key hint shown when the list is empty
    pub add_hint: &'a str,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows drawn by the last render, top to bottom
    pub fn hits(&self) -> &[RowHit] {
        &self.hits
    }

    /// Ensure the selected row is within the viewport
    fn ensure_visible(&mut self, selected: usize, viewport_height: usize, len: usize) {
        if viewport_height == 0 {
            return;
        }
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected + 1 - viewport_height;
        }
        // Never leave blank rows at the bottom after removals
        self.scroll_offset = self
            .scroll_offset
            .min(len.saturating_sub(viewport_height));
    }
}

impl Component for ItemList {
    type Props<'a> = ItemListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = ListAction> {
        match *event {
            EventKind::Click { column, row } => self
                .hits
                .iter()
                .find(|h| hit(h.control, column, row))
                .map(|h| ListAction::ItemIncrement(h.id.clone())),
            EventKind::Scroll { delta, .. } if delta > 0 => Some(ListAction::SelectNext),
            EventKind::Scroll { delta, .. } if delta < 0 => Some(ListAction::SelectPrev),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .title(format!(" Items ({}) ", props.entries.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.hits.clear();

        if props.entries.is_empty() {
            self.scroll_offset = 0;
            let hint = Line::from(vec![
                Span::styled("No items. Press ", Style::default().fg(Color::DarkGray)),
                Span::styled(props.add_hint, Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to add one.", Style::default().fg(Color::DarkGray)),
            ])
            .centered();
            frame.render_widget(Paragraph::new(hint), inner);
            return;
        }

        let viewport_height = inner.height as usize;
        self.ensure_visible(props.selected, viewport_height, props.entries.len());

        let visible = props
            .entries
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(viewport_height);

        for (offset, (index, entry)) in visible.enumerate() {
            let row = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
            let [label_area, counter_area, control_area] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(8),
                Constraint::Length(INCREMENT_LABEL.len() as u16 + 1),
            ])
            .areas(row);

            let is_selected = index == props.selected;
            let row_style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let marker = if is_selected { "▶ " } else { "  " };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(entry.id.as_str(), Style::default().fg(Color::White)),
                ]))
                .style(row_style),
                label_area,
            );
            frame.render_widget(
                Paragraph::new(entry.counter_text.as_str())
                    .right_aligned()
                    .style(row_style.add_modifier(Modifier::BOLD)),
                counter_area,
            );

            let control = Rect::new(
                control_area.x + 1,
                control_area.y,
                control_area.width.saturating_sub(1),
                1,
            );
            frame.render_widget(Paragraph::new("").style(row_style), control_area);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    INCREMENT_LABEL,
                    Style::default().fg(Color::Green).bold(),
                ))
                .style(row_style),
                control,
            );

            self.hits.push(RowHit {
                id: entry.id.clone(),
                row,
                control,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_visible_scrolls_down_and_up() {
        let mut list = ItemList::new();

        list.ensure_visible(7, 5, 10);
        assert_eq!(list.scroll_offset, 3);

        list.ensure_visible(1, 5, 10);
        assert_eq!(list.scroll_offset, 1);
    }

    #[test]
    fn test_ensure_visible_clamps_after_shrink() {
        let mut list = ItemList::new();
        list.ensure_visible(9, 5, 10);
        assert_eq!(list.scroll_offset, 5);

        list.ensure_visible(2, 5, 3);
        assert_eq!(list.scroll_offset, 0);
    }
}
