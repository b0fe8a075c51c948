use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_clues(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let lines: Vec<Line> = self
            .session
            .clue_list()
            .into_iter()
            .map(|clue| {
                let style = if clue.found {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(format!("{}: ", clue.clue), style),
                    Span::styled(clue.display, style.fg(Color::Yellow)),
                ])
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Clues")),
            area,
        );
    }
}
