use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let progress = self.session.progress();
        let ordinal = self
            .session
            .current_level()
            .map_or("-".to_string(), |l| l.ordinal.to_string());

        let status_text = format!(
            "{} | Level {} of {} | Found {}/{} | Time {}s",
            self.category_title(),
            ordinal,
            self.session.level_count(),
            progress.found_count,
            progress.total_count,
            progress.elapsed_seconds
        );

        let color = if self.screen == Screen::LevelComplete {
            Color::Green
        } else {
            Color::White
        };

        f.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help_text = match self.screen {
            Screen::LevelComplete => "Enter/n = next level | r = replay | Ctrl+B = categories",
            Screen::GameComplete => "Enter = categories | Ctrl+Q = quit",
            _ => {
                "letters/Space = select | Enter = check | Esc = clear | ? = hint | Ctrl+B = categories | Ctrl+Q = quit"
            }
        };

        f.render_widget(
            Paragraph::new(help_text).block(Block::default().borders(Borders::ALL).title("Keys")),
            area,
        );
    }
}
