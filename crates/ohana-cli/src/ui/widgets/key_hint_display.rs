use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::color;

/// Keys that trigger an action, and what the action is called.
pub type KeyHint<'a> = (&'a [&'a str], &'a str);

/// One centered line listing the keys that currently do something.
#[derive(Debug)]
pub struct KeyHintDisplay<'a> {
    hints: &'a [KeyHint<'a>],
    block: Option<BlockWidget<'a>>,
}

impl<'a> KeyHintDisplay<'a> {
    pub fn new(hints: &'a [KeyHint<'a>]) -> Self {
        Self { hints, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

const KEY_STYLE: Style = Style::new().fg(color::TEAL);
const TEXT_STYLE: Style = Style::new().fg(color::DIM);

impl Widget for KeyHintDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut spans = vec![];
        for (keys, action) in self.hints.iter().copied() {
            if !spans.is_empty() {
                spans.push(Span::styled("  ", TEXT_STYLE));
            }
            spans.push(Span::styled(keys.join(" "), KEY_STYLE));
            spans.push(Span::styled(format!(" {action}"), TEXT_STYLE));
        }
        Line::from(spans).centered().render(area, buf);
    }
}
