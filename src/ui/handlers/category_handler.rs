//! Category selection and session start-up.

use crate::catalog;

use super::super::{app::App, types::Screen};
use super::GameHandler;

pub struct CategoryHandler<'a> {
    app: &'a mut App,
}

impl<'a> CategoryHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.app.categories.len();
        if count == 0 {
            return;
        }
        let next = (self.app.category_cursor as isize + delta).rem_euclid(count as isize);
        self.app.category_cursor = next as usize;
    }

    pub fn choose_current(&mut self) {
        self.start(self.app.category_cursor);
    }

    pub fn start_by_id(&mut self, id: &str) {
        match self.app.categories.iter().position(|c| c.id == id) {
            Some(index) => {
                self.app.category_cursor = index;
                self.start(index);
            }
            None => self.app.log(format!("Unknown category: {}", id)),
        }
    }

    /// Starts a session on the category at `index`, falling back to the
    /// built-in levels if its content is rejected.
    pub fn start(&mut self, index: usize) {
        let Some(category) = self.app.categories.get(index) else {
            return;
        };
        let title = category.title.clone();
        let levels = category.levels.clone();

        self.app.flashes.clear();
        self.app.active_category = Some(index);

        if let Err(e) = self.app.session.start(levels) {
            self.app
                .log(format!("Category {} unplayable ({}); using built-in levels", title, e));
            if let Err(e) = self.app.session.start(catalog::default_levels()) {
                self.app.log(format!("Built-in levels rejected: {}", e));
                self.app.screen = Screen::Categories;
                return;
            }
        }

        self.app.log(format!("Started category {}", title));
        GameHandler::new(self.app).process_events();
    }

    /// Abandons the level in play and shows the category list.
    pub fn back_to_categories(&mut self) {
        self.app.session.teardown();
        self.app.session.drain_events();
        self.app.flashes.clear();
        self.app.active_category = None;
        self.app.screen = Screen::Categories;
        self.app.log("Returned to category selection");
    }
}
