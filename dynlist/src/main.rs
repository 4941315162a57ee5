//! dynlist - a list you can add to, remove from, and count on
//!
//! The loop follows the usual pattern:
//! 1. Event (key or click) -> ListUi.map_event() -> actions
//! 2. Actions dispatched to the App (store first, then view)
//! 3. If state changed, re-render
//!
//! Each event's actions are dispatched before the next event is mapped, so
//! a key that reads the cursor always sees the effect of the key before it.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p dynlist
//! cargo run -p dynlist -- --prefix listItem --log-file dynlist.log --log-level debug
//! ```

mod cli;

use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dynlist_core::{
    process_raw_event, spawn_event_poller, App, AppState, Config, EventKind, ListAction, ListUi,
    Middleware, RawEvent, TracingMiddleware,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{resolve_config, Args};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args)?;
    let config = resolve_config(&args)?;

    if args.print_config {
        println!("{}", config.to_json());
        return Ok(());
    }

    install_panic_hook();
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_app(&mut terminal, config).await;

    drop(guard);
    result
}

/// Send tracing output to `--log-file`; stdout belongs to the UI
fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .with_context(|| format!("invalid log filter {:?}", args.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;
    Ok(())
}

/// Raw mode, alternate screen and mouse capture, undone on drop
///
/// Dropping runs on every exit path, including `?` returns and unwinding.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        // From here on the guard owns the cleanup, even if the next step fails
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("entering alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best-effort terminal reset; failures are logged, never returned
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %err, "failed to leave alternate screen");
    }
}

/// Reset the terminal before the default hook prints the panic message
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// What the loop does after an event has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue { render: bool },
    Quit,
}

/// Map one event and dispatch its actions in order
fn handle_event<M: Middleware<ListAction>>(
    app: &mut App<M>,
    ui: &mut ListUi,
    event: &EventKind,
) -> Flow {
    let mut render = matches!(event, EventKind::Resize(..));
    for action in ui.map_event(event, app.state()) {
        if action == ListAction::Quit {
            return Flow::Quit;
        }
        render |= app.dispatch(action);
    }
    Flow::Continue { render }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
) -> Result<()> {
    let mut app = App::with_middleware(AppState::from_config(&config), TracingMiddleware);
    let mut ui = ListUi::new(config.keybindings.clone());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    info!(prefix = %config.id_prefix, "dynlist started");
    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| ui.render(frame, frame.area(), app.state()))?;
            should_render = false;
        }

        let Some(raw_event) = event_rx.recv().await else {
            break;
        };
        let Some(event) = process_raw_event(raw_event) else {
            continue;
        };
        match handle_event(&mut app, &mut ui, &event) {
            Flow::Continue { render } => should_render = render,
            Flow::Quit => break,
        }
    }

    cancel_token.cancel();
    info!(items = app.state().store.size(), "dynlist stopped");
    Ok(())
}
