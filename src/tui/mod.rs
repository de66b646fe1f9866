//! TUI module: the interactive documentation page.

pub mod app;
pub mod event;
pub mod ui;
pub mod widgets;

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub use app::App;

use crate::error::Result;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the page until the user quits.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .and_then(|mut terminal| event_loop(&mut terminal, &mut app));

    // Restore the terminal even when the loop failed
    let restored = disable_raw_mode().and_then(|_| execute!(io::stdout(), LeaveAlternateScreen));

    result?;
    restored?;
    Ok(())
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;
        event::handle_events(app, POLL_INTERVAL)?;
    }
    tracing::debug!("Leaving page");
    Ok(())
}
