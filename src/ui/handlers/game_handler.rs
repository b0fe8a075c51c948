//! Play-screen actions and session event handling.

use std::time::Instant;

use crate::{
    session::SessionEvent,
    tiles::TileState,
};

use super::super::{
    app::App,
    types::{Flash, FlashKind, Screen, TILE_COLUMNS},
};

/// Helper struct for driving the session and reacting to its events.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Applies queued session events to the UI and forwards them to audio.
    pub fn process_events(&mut self) {
        self.process_events_at(Instant::now());
    }

    pub fn process_events_at(&mut self, now: Instant) {
        for event in self.app.session.drain_events() {
            self.app.audio.on_event(&event);

            match event {
                SessionEvent::LevelLoaded {
                    level_ordinal,
                    tile_count,
                    ..
                } => {
                    self.app.flashes.clear();
                    self.app.cursor = 0;
                    self.app.screen = Screen::Playing;
                    self.app
                        .log(format!("Level {} loaded ({} tiles)", level_ordinal, tile_count));
                }
                SessionEvent::WordFound { word, .. } => {
                    self.app.log(format!("Found {}", word));
                }
                SessionEvent::WordRejected { candidate, tiles } => {
                    self.app.log(format!("{} is not one of the words", candidate));
                    self.app
                        .flashes
                        .push(Flash::new(FlashKind::Rejected, tiles, now));
                }
                SessionEvent::HintGiven { tile_index } => {
                    self.app.log("Hint shown");
                    self.app
                        .flashes
                        .push(Flash::new(FlashKind::Hint, vec![tile_index], now));
                }
                SessionEvent::LevelComplete {
                    level_ordinal,
                    stars,
                    elapsed_seconds,
                } => {
                    self.app.flashes.clear();
                    self.app.screen = Screen::LevelComplete;
                    self.app.log(format!(
                        "Level {} complete: {}s, {} star(s)",
                        level_ordinal, elapsed_seconds, stars
                    ));
                }
                SessionEvent::GameComplete { history } => {
                    self.app.flashes.clear();
                    self.app.screen = Screen::GameComplete;
                    self.app
                        .log(format!("All levels complete ({} played)", history.len()));
                }
                SessionEvent::TileToggled { .. }
                | SessionEvent::SelectionCleared { .. }
                | SessionEvent::TimerTick { .. } => {}
            }
        }
    }

    pub fn expire_flashes(&mut self, now: Instant) {
        self.app.flashes.retain(|f| !f.is_expired(now));
    }

    pub fn toggle_at_cursor(&mut self) {
        self.app.session.select_tile(self.app.cursor);
    }

    /// Selects the lowest-index available tile carrying `letter`.
    pub fn select_letter(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        let tile = self
            .app
            .session
            .tiles()
            .iter()
            .find(|t| t.letter == letter && t.state == TileState::Available)
            .map(|t| t.index);

        if let Some(index) = tile {
            self.app.cursor = index;
            self.app.session.select_tile(index);
        }
    }

    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let count = self.app.session.tiles().len();
        if count == 0 {
            return;
        }

        let target = self.app.cursor as isize + dx + dy * TILE_COLUMNS as isize;
        if (0..count as isize).contains(&target) {
            self.app.cursor = target as usize;
        }
    }

    pub fn submit(&mut self) {
        self.app.session.submit_selection();
    }

    pub fn clear_selection(&mut self) {
        self.app.session.clear_selection();
    }

    pub fn hint(&mut self) {
        self.app.session.request_hint();
    }

    pub fn next_level(&mut self) {
        self.app.flashes.clear();
        self.app.session.advance();
    }

    pub fn replay(&mut self) {
        self.app.flashes.clear();
        self.app.log("Replaying level");
        self.app.session.replay();
    }
}
