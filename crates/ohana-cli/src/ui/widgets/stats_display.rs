use std::iter;

use ohana_engine::Snapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::style;

/// Score, level, lines and best score, one row each.
pub struct StatsDisplay<'a> {
    snapshot: &'a Snapshot,
    block: Option<BlockWidget<'a>>,
}

type StatFn = fn(&Snapshot) -> String;

const ROWS: [(&str, StatFn); 4] = [
    ("SCORE:", |s| s.score.to_string()),
    ("LEVEL:", |s| s.level.to_string()),
    ("LINES:", |s| s.lines.to_string()),
    ("BEST:", |s| s.best_score.to_string()),
];

impl<'a> StatsDisplay<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        4 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let row_areas = area.layout::<4>(&Layout::vertical([Constraint::Length(1); 4]));

        for ((label, value), area) in iter::zip(ROWS, row_areas) {
            let [label_area, value_area] = area.layout(&Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Fill(1),
            ]));
            Line::styled(label, style)
                .left_aligned()
                .render(label_area, buf);
            Line::styled(value(self.snapshot), style)
                .right_aligned()
                .render(value_area, buf);
        }
    }
}
