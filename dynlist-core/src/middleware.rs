//! Hooks that observe every dispatch

use std::collections::VecDeque;

use crate::action::Action;

/// Middleware trait for intercepting actions
///
/// `before` runs ahead of the reducer, `after` receives whether the reducer
/// reported a state change.
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);

    fn after(&mut self, action: &A, state_changed: bool);
}

/// A middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Logs every action through `tracing`
///
/// `before` logs at trace level, `after` at debug with the outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMiddleware;

impl<A: Action> Middleware<A> for TracingMiddleware {
    fn before(&mut self, action: &A) {
        tracing::trace!(
            action = %action.name(),
            category = action.category().unwrap_or("none"),
            "dispatching"
        );
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(
            action = %action.name(),
            category = action.category().unwrap_or("none"),
            changed = state_changed,
            "dispatched"
        );
    }
}

/// A recorded dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLogEntry {
    /// Monotonic dispatch number, starting at 0
    pub sequence: u64,
    pub name: &'static str,
    pub summary: String,
    pub state_changed: Option<bool>,
}

/// Bounded in-memory history of dispatched actions
///
/// Oldest entries are dropped once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct ActionLog {
    entries: VecDeque<ActionLogEntry>,
    capacity: usize,
    next_sequence: u64,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new(100)
    }
}

impl ActionLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
            next_sequence: 0,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter()
    }

    /// The `n` most recent entries, newest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter().rev().take(n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: Action> Middleware<A> for ActionLog {
    fn before(&mut self, action: &A) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ActionLogEntry {
            sequence: self.next_sequence,
            name: action.name(),
            summary: action.summary(),
            state_changed: None,
        });
        self.next_sequence += 1;
    }

    fn after(&mut self, _action: &A, state_changed: bool) {
        if let Some(entry) = self.entries.back_mut() {
            entry.state_changed = Some(state_changed);
        }
    }
}
