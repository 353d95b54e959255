//! SnackSwipe - swipeable restaurant deck
//!
//! Terminal front end: sets up logging and the terminal, loads the optional
//! config file and runs the event loop.

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

use snackswipe::application::{App, AppMode};
use snackswipe::infrastructure::{init_logging, ConfigRepository, CONFIG_FILE, LOG_FILE};
use snackswipe::presentation::{render_ui, InputHandler};

/// Redraw interval while a card motion is playing.
const FRAME: Duration = Duration::from_millis(16);
/// Poll interval while idle.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Entry point.
///
/// # Errors
///
/// Returns an error if the config file is invalid, if logging cannot be set
/// up, or if terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(Path::new(LOG_FILE))?;
    let config = ConfigRepository::load_or_default(Path::new(CONFIG_FILE))?;
    info!(?config, "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "event loop failed");
        println!("{err:?}");
    }

    info!(
        liked = app.store.liked().len(),
        wishlisted = app.store.wishlisted().len(),
        rejected = app.store.rejected().len(),
        skipped = app.store.skipped().len(),
        energy = app.store.energy(),
        "session finished"
    );
    Ok(())
}

/// Main event loop.
///
/// Draws, then waits for input. While a card motion is playing the loop
/// wakes every frame to advance it.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.update_viewport_width(terminal.size()?.width);
        terminal.draw(|f| render_ui(f, app))?;

        let timeout = if app.is_animating() { FRAME } else { IDLE_POLL };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') if matches!(app.mode, AppMode::Normal) => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                },
                Event::Mouse(mouse) => InputHandler::handle_mouse_event(app, mouse),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
}
