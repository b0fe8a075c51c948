//! Log panel rendering.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let logs = self.logs.lines();

        // Borders take two rows.
        let height = area.height.saturating_sub(2) as usize;
        let start = logs.len().saturating_sub(height);
        let newest = logs.len().saturating_sub(1);

        let lines: Vec<Line> = logs[start..]
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let style = if start + i == newest {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::styled(l.clone(), style)
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log")),
            area,
        );
    }
}
