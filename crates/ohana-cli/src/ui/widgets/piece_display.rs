use ohana_engine::{PieceKind, Shape};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{BlockDisplay, Tile};

/// Preview of a single piece, cropped to its occupied cells and centered.
#[derive(Debug, Default)]
pub struct PieceDisplay<'a> {
    piece: Option<(PieceKind, Shape)>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn piece(self, kind: PieceKind, shape: Shape) -> Self {
        Self {
            piece: Some((kind, shape)),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

/// Column and row ranges spanned by the occupied cells of `shape`.
fn occupied_bounds(shape: &Shape) -> Option<((i32, i32), (i32, i32))> {
    shape.occupied().fold(None, |bounds, (x, y)| {
        let ((x0, x1), (y0, y1)) = bounds.unwrap_or(((x, x), (y, y)));
        Some(((x0.min(x), x1.max(x)), (y0.min(y), y1.max(y))))
    })
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some((kind, shape)) = &self.piece else {
            return;
        };
        let Some(((x0, x1), (y0, y1))) = occupied_bounds(shape) else {
            return;
        };
        let cols = u16::try_from(x1 - x0 + 1).unwrap_or(0);
        let rows = u16::try_from(y1 - y0 + 1).unwrap_or(0);
        let piece_area = area.centered(
            Constraint::Length(cols * BlockDisplay::width()),
            Constraint::Length(rows * BlockDisplay::height()),
        );

        let horizontal = Layout::horizontal(
            (0..cols).map(|_| Constraint::Length(BlockDisplay::width())),
        )
        .flex(Flex::Center);
        let vertical =
            Layout::vertical((0..rows).map(|_| Constraint::Length(BlockDisplay::height())));

        let occupied = BlockDisplay::from_tile(Tile::Piece(*kind), false);
        let empty = BlockDisplay::from_tile(Tile::Empty, false);
        for (dy, grid_row) in (y0..).zip(piece_area.layout_vec(&vertical)) {
            for (dx, grid_cell) in (x0..).zip(grid_row.layout_vec(&horizontal)) {
                let filled = usize::try_from(dx)
                    .ok()
                    .zip(usize::try_from(dy).ok())
                    .is_some_and(|(x, y)| shape.is_occupied(x, y));
                let block = if filled { &occupied } else { &empty };
                block.render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_crop_empty_rows() {
        let shape = PieceKind::I.shape();
        assert_eq!(occupied_bounds(&shape), Some(((0, 3), (1, 1))));
        let shape = PieceKind::T.shape();
        assert_eq!(occupied_bounds(&shape), Some(((0, 2), (0, 1))));
    }
}
