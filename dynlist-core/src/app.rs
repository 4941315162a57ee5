//! Owned application value: state, reducer and middleware

use crate::action::ListAction;
use crate::middleware::{Middleware, NoopMiddleware};
use crate::reducer::reducer;
use crate::state::AppState;

/// The list application
///
/// Owns its [`AppState`]; there is no process-wide state, so any number of
/// apps can live side by side (one per test, for instance). Every dispatch
/// runs to completion before the next one starts.
///
/// # Example
/// ```
/// use dynlist_core::{App, AppState, ListAction};
///
/// let mut app = App::new(AppState::default());
/// assert!(app.dispatch(ListAction::ItemAdd));
/// assert_eq!(app.state().store.size(), 1);
/// ```
pub struct App<M: Middleware<ListAction> = NoopMiddleware> {
    state: AppState,
    middleware: M,
}

impl App<NoopMiddleware> {
    pub fn new(state: AppState) -> Self {
        Self::with_middleware(state, NoopMiddleware)
    }
}

impl<M: Middleware<ListAction>> App<M> {
    pub fn with_middleware(state: AppState, middleware: M) -> Self {
        Self { state, middleware }
    }

    /// Run `action` through middleware and reducer
    ///
    /// Returns `true` if the state changed and a re-render is needed.
    pub fn dispatch(&mut self, action: ListAction) -> bool {
        self.middleware.before(&action);
        let changed = reducer(&mut self.state, action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::ActionLog;

    #[test]
    fn test_dispatch_goes_through_middleware() {
        let mut app = App::with_middleware(AppState::default(), ActionLog::new(8));

        app.dispatch(ListAction::ItemAdd);
        app.dispatch(ListAction::SelectNext);

        let log: Vec<_> = app
            .middleware()
            .entries()
            .map(|e| (e.name, e.state_changed))
            .collect();
        assert_eq!(
            log,
            vec![("ItemAdd", Some(true)), ("SelectNext", Some(false))]
        );
        assert_eq!(app.state().store.size(), 1);
    }

    #[test]
    fn test_apps_are_isolated() {
        let mut a = App::new(AppState::default());
        let mut b = App::new(AppState::default());

        a.dispatch(ListAction::ItemAdd);
        a.dispatch(ListAction::ItemAdd);
        b.dispatch(ListAction::ItemAdd);

        assert_eq!(a.state().store.size(), 2);
        assert_eq!(b.state().store.items()[0].id.as_str(), "item0");
    }
}
