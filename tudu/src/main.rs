//! tudu - persistent to-do list for the terminal
//!
//! The pattern, end to end:
//! - State: what the app knows ([`tudu_core::AppState`])
//! - Actions: what can happen ([`tudu_core::TodoAction`])
//! - Reducer: how state changes (pure function)
//! - Store: where state lives, with persistence attached as a subscriber
//! - Main loop: Event -> Action -> Dispatch -> Render
//!
//! Keys: a/i = add task, j/k = move, space/x = toggle, d = delete,
//! f/1/2/3 = filter, q = quit

mod event;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use tudu_core::{reduce, AppState, LoggingMiddleware, Storage, StoreWithMiddleware, TodoAction};

use crate::event::{spawn_event_poller, RawEvent};
use crate::ui::{KeyOutcome, UiState};

/// Log to a file next to the state file; the terminal itself is owned by
/// the alternate screen.
fn init_logging() -> io::Result<()> {
    let dir = Storage::default_dir();
    std::fs::create_dir_all(&dir)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("tudu.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    init_logging()?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    // Action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<TodoAction>();

    // Store = state + reducer, with the saved state loaded in and a
    // write-through subscriber keeping the file current from here on.
    let mut store =
        StoreWithMiddleware::new(AppState::default(), reduce, LoggingMiddleware::new());
    Storage::new(Storage::default_path()).attach(&mut store);

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut view = UiState::new();
    let mut should_render = true;

    loop {
        // Render if state changed
        if should_render {
            terminal.draw(|frame| ui::draw(frame, store.state(), &view))?;
            should_render = false;
        }

        tokio::select! {
            Some(raw) = event_rx.recv() => match raw {
                RawEvent::Key(key) => match view.handle_key(key, store.state()) {
                    KeyOutcome::Dispatch(action) => {
                        let _ = action_tx.send(action);
                    }
                    KeyOutcome::Redraw => should_render = true,
                    KeyOutcome::Quit => break,
                    KeyOutcome::Ignored => {}
                },
                RawEvent::Resize(_, _) => should_render = true,
            },

            Some(action) = action_rx.recv() => {
                should_render = store.dispatch(action) || should_render;
            }
        }
    }

    cancel_token.cancel();
    Ok(())
}
