//! Keyboard input routing per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{app::App, types::Screen};
use super::{CategoryHandler, GameHandler};

/// Helper struct for managing keyboard input.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the player asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.app.log("Exit requested");
            return true;
        }

        match self.app.screen {
            Screen::Categories => self.handle_categories_key(key),
            Screen::Playing => self.handle_playing_key(key),
            Screen::LevelComplete => self.handle_level_complete_key(key),
            Screen::GameComplete => self.handle_game_complete_key(key),
        }

        GameHandler::new(self.app).process_events();
        false
    }

    fn handle_categories_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => CategoryHandler::new(self.app).move_cursor(-1),
            KeyCode::Down => CategoryHandler::new(self.app).move_cursor(1),
            KeyCode::Enter => CategoryHandler::new(self.app).choose_current(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as u8 - b'1') as usize;
                if index < self.app.categories.len() {
                    CategoryHandler::new(self.app).start(index);
                }
            }
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('b' | 'B') if ctrl => {
                CategoryHandler::new(self.app).back_to_categories()
            }
            KeyCode::Char('?') => GameHandler::new(self.app).hint(),
            KeyCode::Char(' ') => GameHandler::new(self.app).toggle_at_cursor(),
            KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
                GameHandler::new(self.app).select_letter(c)
            }
            KeyCode::Left => GameHandler::new(self.app).move_cursor(-1, 0),
            KeyCode::Right => GameHandler::new(self.app).move_cursor(1, 0),
            KeyCode::Up => GameHandler::new(self.app).move_cursor(0, -1),
            KeyCode::Down => GameHandler::new(self.app).move_cursor(0, 1),
            KeyCode::Enter => GameHandler::new(self.app).submit(),
            KeyCode::Backspace | KeyCode::Esc => GameHandler::new(self.app).clear_selection(),
            _ => {}
        }
    }

    fn handle_level_complete_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('b' | 'B') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                CategoryHandler::new(self.app).back_to_categories()
            }
            KeyCode::Enter | KeyCode::Char('n' | 'N') => GameHandler::new(self.app).next_level(),
            KeyCode::Char('r' | 'R') => GameHandler::new(self.app).replay(),
            _ => {}
        }
    }

    fn handle_game_complete_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc)
            || (key.code == KeyCode::Char('b') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            CategoryHandler::new(self.app).back_to_categories();
        }
    }
}
