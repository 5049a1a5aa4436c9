//! TUI module
//!
//! Terminal user interface for importing manifests, built with ratatui.

mod app;
pub mod constants;
mod theme;
pub mod views;

pub use app::*;
pub use theme::*;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Run the TUI application until the user quits
///
/// The terminal is restored on every exit path, including errors from the
/// main loop.
pub async fn run_tui(mut app: App) -> Result<()> {
    tracing::debug!("Initializing TUI");
    let enable_mouse = app.config().ui.enable_mouse;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::debug!("TUI initialized, entering main loop");
    let result = run_loop(&mut terminal, &mut app);

    tracing::debug!("TUI shutting down");
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if enable_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config().ui.tick_rate_ms.max(1));

    loop {
        app.poll_import();
        terminal.draw(|f| app.render(f))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) == Some(true) {
                    break;
                }
            }
        }

        app.tick();
    }

    Ok(())
}
