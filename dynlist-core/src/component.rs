//! Component trait for UI pieces

use ratatui::{layout::Rect, Frame};

use crate::action::ListAction;
use crate::event::EventKind;

/// A UI element that renders from props and turns events into actions
///
/// Components follow these rules:
/// 1. Props contain all read-only data needed for rendering
/// 2. `handle_event` returns actions, never mutates application state
/// 3. `render` is a function of props plus internal UI state
///
/// Internal UI state (scroll offset, on-screen hit areas from the last
/// render) may live in `&mut self`.
pub trait Component {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns `None` for no action, `Some(action)` for one, or any other
    /// `IntoIterator`. Default: render-only component.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = ListAction> {
        None::<ListAction>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

/// Whether the cell at (`column`, `row`) falls inside `area`
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
