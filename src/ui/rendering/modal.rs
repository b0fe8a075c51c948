//! Level-complete and game-complete overlays.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::app::App;

use super::centered;

fn stars(count: u8) -> String {
    (1..=3).map(|i| if i <= count { '★' } else { '☆' }).collect()
}

impl App {
    pub(in crate::ui) fn draw_level_complete(&self, f: &mut Frame) {
        let area = centered(f.area(), 60, 60);
        let progress = self.session.progress();

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{}  in {}s", stars(progress.star_rating), progress.elapsed_seconds),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for (word, definition) in self.session.definitions() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", word), Style::default().fg(Color::Green)),
                Span::raw(definition.to_string()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from("Enter/n = next level | r = replay"));

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Level Complete")),
            area,
        );
    }

    pub(in crate::ui) fn draw_game_complete(&self, f: &mut Frame) {
        let area = centered(f.area(), 50, 60);

        let mut lines = vec![
            Line::from(Span::styled(
                "All levels complete!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for result in self.session.history() {
            lines.push(Line::from(format!(
                "Level {:>2}  {:>4}s  {}",
                result.level_ordinal,
                result.elapsed_seconds,
                stars(result.stars)
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from("Enter = back to categories"));

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Game Complete")),
            area,
        );
    }
}
