//! Terminal events and the crossterm polling task

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Normalised event handed to components
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Key press (releases and repeats are filtered out)
    Key(KeyEvent),
    /// Left button pressed at a cell
    Click { column: u16, row: u16 },
    /// Scroll wheel, positive is down
    Scroll { column: u16, row: u16, delta: isize },
    /// Any other mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Spawn the event polling task with cancellation support
///
/// Polls crossterm and forwards events through `tx` until `cancel_token` is
/// cancelled or the receiving side is dropped.
///
/// # Arguments
/// * `tx` - Channel to send raw events
/// * `poll_timeout` - Timeout for each poll operation
/// * `loop_sleep` - Sleep duration between poll cycles
/// * `cancel_token` - Token to cancel the polling task
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let raw = match event::read() {
                            Ok(event::Event::Key(key)) => RawEvent::Key(key),
                            Ok(event::Event::Mouse(mouse)) => RawEvent::Mouse(mouse),
                            Ok(event::Event::Resize(w, h)) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Process a raw event into an [`EventKind`]
///
/// Returns `None` for key releases and repeats, which would otherwise
/// double-fire actions on terminals that report them.
pub fn process_raw_event(raw: RawEvent) -> Option<EventKind> {
    match raw {
        RawEvent::Key(key) if key.kind != KeyEventKind::Press => None,
        RawEvent::Key(key) => Some(EventKind::Key(key)),
        RawEvent::Mouse(mouse) => Some(match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => EventKind::Click {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::ScrollDown => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: 1,
            },
            MouseEventKind::ScrollUp => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: -1,
            },
            _ => EventKind::Mouse(mouse),
        }),
        RawEvent::Resize(w, h) => Some(EventKind::Resize(w, h)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_press_passes() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let kind = process_raw_event(RawEvent::Key(key));
        assert!(matches!(kind, Some(EventKind::Key(_))));
    }

    #[test]
    fn test_key_release_dropped() {
        let key = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert!(process_raw_event(RawEvent::Key(key)).is_none());
    }

    #[test]
    fn test_left_click() {
        let kind = process_raw_event(RawEvent::Mouse(mouse(MouseEventKind::Down(
            MouseButton::Left,
        ))));
        assert!(matches!(
            kind,
            Some(EventKind::Click { column: 10, row: 4 })
        ));
    }

    #[test]
    fn test_right_click_is_plain_mouse() {
        let kind = process_raw_event(RawEvent::Mouse(mouse(MouseEventKind::Down(
            MouseButton::Right,
        ))));
        assert!(matches!(kind, Some(EventKind::Mouse(_))));
    }

    #[test]
    fn test_scroll() {
        match process_raw_event(RawEvent::Mouse(mouse(MouseEventKind::ScrollUp))) {
            Some(EventKind::Scroll { delta, .. }) => assert_eq!(delta, -1),
            other => panic!("Expected Scroll event, got {:?}", other),
        }
    }

    #[test]
    fn test_resize() {
        let kind = process_raw_event(RawEvent::Resize(80, 24));
        assert!(matches!(kind, Some(EventKind::Resize(80, 24))));
    }

    #[tokio::test]
    async fn test_poller_stops_when_cancelled() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        let handle = spawn_event_poller(
            tx,
            Duration::from_millis(1),
            Duration::from_millis(5),
            token.clone(),
        );

        token.cancel();
        let joined = tokio::time::timeout(Duration::from_secs(2), handle).await;
        assert!(matches!(joined, Ok(Ok(()))));
    }
}
