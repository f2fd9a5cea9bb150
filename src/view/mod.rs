use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::model::film::Film;

pub mod app;
mod ui;

use app::App;

/// Runs the interactive table over the loaded record set until the user
/// quits. The terminal is restored even when the loop errors out.
pub fn run_tui(films: Vec<Film>) -> Result<(), String> {
    let mut terminal =
        setup_terminal().map_err(|e| format!("Failed to set up terminal: {:?}", e))?;
    let mut app = App::new(films);

    let result = run_event_loop(&mut terminal, &mut app);

    if let Err(e) = restore_terminal(&mut terminal) {
        log::error!("Failed to restore terminal: {:?}", e);
    }

    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// One full redraw per input event; every handler recomputes the
/// projection from scratch instead of patching the previous frame.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| ui::draw(frame, app))
            .map_err(|e| format!("Failed to draw frame: {:?}", e))?;

        match event::read() {
            Ok(Event::Key(key)) => app.handle_key(key),
            Ok(_) => {}
            Err(e) => return Err(format!("Failed to read terminal event: {:?}", e)),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
