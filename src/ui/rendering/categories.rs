//! Category selection screen.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_categories(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let items: Vec<ListItem> = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let text = format!(
                    "{}. {} ({} levels)",
                    i + 1,
                    category.title,
                    category.levels.len()
                );
                let style = if i == self.category_cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(text).style(style)
            })
            .collect();

        f.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Choose a category | Up/Down + Enter | Ctrl+Q = quit"),
            ),
            area,
        );
    }
}
