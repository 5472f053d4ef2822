use std::iter;

use ohana_engine::{Board, Snapshot};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{BlockDisplay, Tile};

/// The playfield: settled cells, the falling piece and its landing preview.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    snapshot: &'a Snapshot,
    show_ghost: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            show_ghost: true,
            block: None,
        }
    }

    pub fn show_ghost(self, show_ghost: bool) -> Self {
        Self { show_ghost, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        10 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        20 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }

    /// Tile shown at column `x`, row `y`. The falling piece wins over the ghost.
    fn tile(&self, x: usize, y: usize) -> Tile {
        let snapshot = self.snapshot;
        if let Some(active) = &snapshot.active
            && active.contains(x, y)
        {
            return Tile::Piece(active.kind);
        }
        if self.show_ghost
            && let Some(ghost) = &snapshot.ghost
            && ghost.contains(x, y)
        {
            return Tile::Ghost;
        }
        snapshot.board.cell(x, y).into()
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..Board::WIDTH).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints =
            (0..Board::HEIGHT).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_rows = area
            .layout::<{ Board::HEIGHT }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Board::WIDTH }>(&horizontal));

        for (y, grid_row) in iter::zip(0.., grid_rows) {
            for (x, grid_cell) in iter::zip(0.., grid_row) {
                BlockDisplay::from_tile(self.tile(x, y), true).render(grid_cell, buf);
            }
        }
    }
}
