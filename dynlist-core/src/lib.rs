//! Core of the dynlist TUI: a list of items, each with its own counter
//!
//! # Core Concepts
//!
//! - **ItemStore**: ordered collection of items, the single source of truth
//! - **ViewSync**: rendered mirror of the store plus a warning banner
//! - **ListAction**: what the user can ask for (add, remove last, increment)
//! - **reducer**: mutates the store, then projects the result onto the view
//! - **App**: owns the state and runs each action through middleware
//! - **Components**: render from state, turn key presses and clicks into actions
//!
//! # Example
//!
//! ```
//! use dynlist_core::{App, AppState, ItemId, ListAction};
//!
//! let mut app = App::new(AppState::default());
//! app.dispatch(ListAction::ItemAdd);
//! app.dispatch(ListAction::ItemAdd);
//! app.dispatch(ListAction::ItemIncrement(ItemId::from("item1")));
//!
//! let view = &app.state().view;
//! assert_eq!(view.entries()[1].counter_text, "1");
//!
//! app.dispatch(ListAction::ItemRemoveLast);
//! app.dispatch(ListAction::ItemRemoveLast);
//! app.dispatch(ListAction::ItemRemoveLast);
//! assert_eq!(
//!     app.state().view.warning(),
//!     Some("There are no more list items to remove")
//! );
//! ```

// Lets `#[derive(Action)]` expand to `::dynlist_core::Action` inside this crate too
extern crate self as dynlist_core;

pub mod action;
pub mod app;
pub mod component;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod item;
pub mod keybindings;
pub mod middleware;
pub mod reducer;
pub mod state;
pub mod store;
pub mod testing;
#[cfg(test)]
mod test_log;
pub mod ui;
pub mod view;

pub use action::{Action, ListAction};
pub use dynlist_macros::Action;
pub use app::App;
pub use component::Component;
pub use config::Config;
pub use error::{ConfigError, StoreError};
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use item::{Item, ItemId, DEFAULT_ID_PREFIX};
pub use keybindings::{format_key_for_display, parse_key_string, Command, Keybindings};
pub use middleware::{ActionLog, ActionLogEntry, Middleware, NoopMiddleware, TracingMiddleware};
pub use reducer::reducer;
pub use state::{AppState, EMPTY_WARNING};
pub use store::ItemStore;
pub use ui::ListUi;
pub use view::{BannerState, RenderedEntry, ViewSync};
