mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{Flash, FlashKind, LaunchOptions, LogBuffer, Screen};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use crate::{
    audio::{Audio, TerminalBell},
    session::PuzzleSession,
    timer::SystemClock,
};

/// Entry point for running the UI.
pub fn run_ui(options: LaunchOptions) -> Result<()> {
    let logs = LogBuffer::new();

    let session = match options.seed {
        Some(seed) => PuzzleSession::with_seed(options.config, SystemClock, seed),
        None => PuzzleSession::new(options.config, SystemClock),
    };
    let audio = if options.mute {
        Audio::silent()
    } else {
        Audio::new(TerminalBell::new(stdout()))
    };

    let mut app = App::new(options.categories, session, audio, logs.clone());
    if let Some(notice) = options.notice {
        app.log(notice);
    }
    if let Some(id) = options.initial_category {
        handlers::CategoryHandler::new(&mut app).start_by_id(&id);
    }

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
