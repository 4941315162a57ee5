use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::ListAction;
use crate::component::{hit, Component};
use crate::event::EventKind;

pub const CLOSE_SYMBOL: &str = "×";

/// Dismissible warning shown above the list
///
/// Renders nothing while the banner is hidden.
#[derive(Debug, Default)]
pub struct WarningBanner {
    close_area: Rect,
}

pub struct WarningBannerProps<'a> {
    pub message: Option<&'a str>,
}

impl WarningBanner {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Screen area of the close control from the last render
    pub fn close_area(&self) -> Rect {
        self.close_area
    }
}

impl Component for WarningBanner {
    type Props<'a> = WarningBannerProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = ListAction> {
        match *event {
            EventKind::Click { column, row }
                if props.message.is_some() && hit(self.close_area, column, row) =>
            {
                Some(ListAction::WarningDismiss)
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(message) = props.message else {
            self.close_area = Rect::default();
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = Line::from(vec![
            Span::styled("WARNING! ", Style::default().fg(Color::Yellow).bold()),
            Span::styled(message, Style::default().fg(Color::Yellow)),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // Close control in the top-right corner of the content row
        self.close_area = Rect::new(
            inner.right().saturating_sub(2),
            inner.y,
            1,
            inner.height.min(1),
        )
        .intersection(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(
                CLOSE_SYMBOL,
                Style::default().fg(Color::Yellow).bold(),
            )),
            self.close_area,
        );
    }
}
