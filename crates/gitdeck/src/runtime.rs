use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::app::App;
use crate::error::AppError;
use crate::ui;

mod key_handler;
mod terminal;

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub(crate) enum EventResult {
    Continue,
    Quit,
}

/// Runs the TUI event/render loop until the user exits.
///
/// Every key event is handled to completion before the next frame is drawn.
///
/// # Errors
/// Returns an error if terminal setup, rendering, or event polling fails.
pub fn run(app: &mut App, tick_rate: Duration) -> Result<(), AppError> {
    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;
    info!("dashboard started");

    run_main_loop(app, &mut terminal, tick_rate)?;

    terminal.show_cursor()?;
    info!("dashboard stopped");

    Ok(())
}

fn run_main_loop(
    app: &mut App,
    terminal: &mut TuiTerminal,
    tick_rate: Duration,
) -> Result<(), AppError> {
    loop {
        app.sync_selection();
        terminal.draw(|f| ui::render(f, app))?;

        if !event::poll(tick_rate)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if matches!(key_handler::handle_key(app, key), EventResult::Quit) {
                break;
            }
        }
    }

    Ok(())
}
