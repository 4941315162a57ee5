use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::component::Component;
use crate::keybindings::{Command, Keybindings};

const HINTS: [(Command, &str); 5] = [
    (Command::Add, "add"),
    (Command::RemoveLast, "remove"),
    (Command::Increment, "+1"),
    (Command::DismissWarning, "dismiss"),
    (Command::Quit, "quit"),
];

/// Key hints along the bottom edge
pub struct HelpBar;

pub struct HelpBarProps<'a> {
    pub keybindings: &'a Keybindings,
}

impl Component for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let spans: Vec<Span> = HINTS
            .iter()
            .filter_map(|(command, label)| {
                props
                    .keybindings
                    .display_key(*command)
                    .map(|key| (key, *label))
            })
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key}"), Style::default().fg(Color::Cyan).bold()),
                    Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
