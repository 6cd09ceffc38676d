pub mod events;
pub mod layout;
pub mod view;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

use crate::app::App;
use crate::config::ThemeColors;

/// Run the interactive session until the user quits. The terminal is put
/// back in order before any error is propagated.
pub fn run_tui(app: &mut App, colors: &ThemeColors) -> Result<()> {
    info!("starting interactive session");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app, colors);

    // Simple cleanup, no fancy signal handling
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!("session error: {:?}", err);
        return Err(err);
    }

    info!("session ended");
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    colors: &ThemeColors,
) -> Result<()> {
    loop {
        terminal.draw(|f| view::draw(f, app, colors))?;

        // Blocks until the next event; resizes just fall through to the
        // next draw
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
