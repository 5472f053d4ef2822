use ohana_engine::{SessionState, Snapshot};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{BoardDisplay, PieceDisplay, QuoteDisplay, StatsDisplay, color, style};

/// Playfield with the NEXT, STATS and QUOTE panels around it.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    snapshot: &'a Snapshot,
    show_ghost: bool,
    horizontal_padding: u16,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(snapshot: &'a Snapshot, show_ghost: bool) -> Self {
        Self {
            snapshot,
            show_ghost,
            horizontal_padding: 1,
        }
    }

    /// Rows taken by the tallest column.
    pub fn height() -> u16 {
        22
    }
}

fn panel(title: &str, padding: Padding, border: Style) -> Block<'_> {
    Block::bordered()
        .title(Line::from(title).centered())
        .padding(padding)
        .border_style(border)
        .style(style::DEFAULT)
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.snapshot;
        let padding = Padding::symmetric(self.horizontal_padding, 0);
        let border = Style::new().fg(match snapshot.state {
            SessionState::Idle => color::DIM,
            SessionState::Running => color::TEAL,
            SessionState::Paused => color::YELLOW,
            SessionState::GameOver => color::CORAL,
        });

        let board = BoardDisplay::new(snapshot)
            .show_ghost(self.show_ghost)
            .block(Block::bordered().border_style(border).style(style::DEFAULT));
        let next = PieceDisplay::new()
            .piece(snapshot.next_kind, snapshot.next_shape)
            .block(panel("NEXT", padding, border));
        let stats = StatsDisplay::new(snapshot).block(panel("STATS", padding, border));
        let quote =
            QuoteDisplay::new(snapshot.last_quote.as_deref()).block(panel("QUOTE", padding, border));

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(u16::max(stats.width(), quote.width())),
            Constraint::Length(board.width()),
            Constraint::Length(next.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area, quote_area] = Layout::vertical([
            Constraint::Length(stats.height()),
            Constraint::Length(quote.height()),
        ])
        .spacing(1)
        .areas(left_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(center_column);
        let [next_area] = Layout::vertical([Constraint::Length(next.height())]).areas(right_column);

        let board_width = board.width();
        stats.render(stats_area, buf);
        quote.render(quote_area, buf);
        board.render(board_area, buf);
        next.render(next_area, buf);

        let popup = match snapshot.state {
            SessionState::Running => None,
            SessionState::Idle => Some((
                "Press Enter to start",
                Style::new().fg(color::BLACK).bg(color::TEAL),
            )),
            SessionState::Paused => {
                Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW)))
            }
            SessionState::GameOver => Some((
                "GAME OVER – press R",
                Style::new().fg(color::WHITE).bg(color::CORAL),
            )),
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area = board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
