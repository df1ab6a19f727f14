pub mod app;
pub mod draw;

use crate::tui::app::App;
use crate::tui::draw::draw_app;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

/// Runs the interactive viewer until `q` is pressed.
pub fn run(mut app: App) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw_app(frame, app))?;

        if !crossterm::event::poll(Duration::from_millis(16))? {
            continue;
        }
        let Event::Key(key) = crossterm::event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        // parameters were validated when the app was built, so regeneration cannot fail
        let _ = match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Char('n') => app.next_seed(),
            KeyCode::Char('p') => app.prev_seed(),
            KeyCode::Char('b') => app.toggle_balance(),
            _ => Ok(()),
        };
    }
}
