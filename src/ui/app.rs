use std::{fmt::Display, io::Stdout, time::Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{audio::Audio, catalog::Category, session::PuzzleSession};

use super::{
    handlers::{GameHandler, InputHandler},
    types::{Flash, LogBuffer, Screen},
};

const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);

/// Main application state container.
pub struct App {
    pub(in crate::ui) categories: Vec<Category>,
    pub(in crate::ui) category_cursor: usize,
    pub(in crate::ui) active_category: Option<usize>,
    pub(in crate::ui) session: PuzzleSession,
    pub(in crate::ui) audio: Audio,
    pub(in crate::ui) screen: Screen,
    pub(in crate::ui) cursor: usize,
    pub(in crate::ui) flashes: Vec<Flash>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(
        categories: Vec<Category>,
        session: PuzzleSession,
        audio: Audio,
        logs: LogBuffer,
    ) -> Self {
        Self {
            categories,
            category_cursor: 0,
            active_category: None,
            session,
            audio,
            screen: Screen::Categories,
            cursor: 0,
            flashes: Vec::new(),
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            self.session.tick();
            {
                let mut game = GameHandler::new(self);
                game.process_events();
                game.expire_flashes(Instant::now());
            }

            terminal.draw(|f| self.draw(f))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && InputHandler::new(self).handle_key(key)
            {
                self.session.teardown();
                return Ok(());
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    pub(in crate::ui) fn category_title(&self) -> &str {
        self.active_category
            .and_then(|i| self.categories.get(i))
            .map_or("-", |c| c.title.as_str())
    }

    pub(in crate::ui) fn flash_for(&self, tile: usize) -> Option<&Flash> {
        // Latest flash wins when several cover the same tile.
        self.flashes.iter().rev().find(|f| f.tiles.contains(&tile))
    }
}
