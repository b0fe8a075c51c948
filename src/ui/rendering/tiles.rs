//! Letter tile grid and current selection.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    tiles::{Tile, TileState},
    ui::{
        app::App,
        types::{FlashKind, TILE_COLUMNS},
    },
};

impl App {
    fn tile_style(&self, tile: &Tile) -> Style {
        let mut style = match self.flash_for(tile.index).map(|f| f.kind) {
            Some(FlashKind::Rejected) if tile.state != TileState::Used => {
                Style::default().bg(Color::Red).fg(Color::White)
            }
            Some(FlashKind::Hint) if tile.state != TileState::Used => {
                Style::default().bg(Color::Cyan).fg(Color::Black)
            }
            _ => match tile.state {
                TileState::Available => Style::default().bg(Color::DarkGray).fg(Color::White),
                TileState::Selected => Style::default().bg(Color::Yellow).fg(Color::Black),
                TileState::Used => Style::default().fg(Color::DarkGray),
            },
        };

        if tile.index == self.cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        style
    }

    pub(in crate::ui) fn draw_tiles(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let lines: Vec<Line> = self
            .session
            .tiles()
            .chunks(TILE_COLUMNS)
            .flat_map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .flat_map(|tile| {
                        let text = if tile.state == TileState::Used {
                            " · ".to_string()
                        } else {
                            format!(" {} ", tile.letter)
                        };
                        [Span::styled(text, self.tile_style(tile)), Span::raw(" ")]
                    })
                    .collect();
                [Line::from(spans), Line::default()]
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Letters")),
            area,
        );
    }

    pub(in crate::ui) fn draw_selection(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let candidate = self.session.candidate();

        f.render_widget(
            Paragraph::new(format!("{}▌", candidate))
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title("Word")),
            area,
        );
    }
}
