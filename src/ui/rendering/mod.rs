mod categories;
mod clues;
mod logs;
mod modal;
mod status;
mod tiles;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        if self.screen == Screen::Categories {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(6), Constraint::Length(6)])
                .split(f.area());

            self.draw_categories(f, layout[0]);
            self.draw_logs(f, layout[1]);
            return;
        }

        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(main_layout[0]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(10)])
            .split(main_layout[1]);

        self.draw_status(f, left_layout[0]);
        self.draw_tiles(f, left_layout[1]);
        self.draw_selection(f, left_layout[2]);
        self.draw_help(f, left_layout[3]);
        self.draw_clues(f, right_layout[0]);
        self.draw_logs(f, right_layout[1]);

        match self.screen {
            Screen::LevelComplete => self.draw_level_complete(f),
            Screen::GameComplete => self.draw_game_complete(f),
            _ => {}
        }
    }
}

/// A rectangle of the given percentage size centred in `area`.
pub(in crate::ui) fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
